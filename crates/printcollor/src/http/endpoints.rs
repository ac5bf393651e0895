//! Token endpoint definitions and wire types.
//!
//! The backend issues SimpleJWT token pairs: `POST token/` with username and
//! password returns `{access, refresh}`; `POST token/refresh/` with the
//! refresh token returns a new `{access}`.

use serde::{Deserialize, Serialize};

/// Token-issuing endpoint.
pub(crate) const TOKEN: &str = "token/";

/// Token refresh endpoint.
pub(crate) const TOKEN_REFRESH: &str = "token/refresh/";

/// Request body for `token/`.
#[derive(Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from `token/`.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access: String,
    pub refresh: String,
}

/// Request body for `token/refresh/`.
#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Response from `token/refresh/`.
///
/// The rotated refresh token is only present when the backend enables
/// rotation; the original deployment returns the access token alone.
#[derive(Debug, Deserialize)]
pub(crate) struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// DRF error body. Standard views use `detail`; some custom views `error`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub detail: Option<String>,
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub(crate) fn into_detail(self) -> Option<String> {
        self.detail.or(self.error)
    }
}
