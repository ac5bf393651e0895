//! Account and dashboard operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::http::ApiClient;

use super::models::{DashboardStats, UserMe, UserMeUpdate};
use super::paths;

#[derive(Serialize)]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChangePasswordResponse {
    #[allow(dead_code)]
    message: Option<String>,
}

impl ApiClient {
    /// Fetch the authenticated user's profile.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<UserMe, Error> {
        debug!("fetching profile");
        self.get(paths::ME).await
    }

    /// Update the authenticated user's profile.
    #[instrument(skip(self, update))]
    pub async fn update_me(&self, update: &UserMeUpdate) -> Result<UserMe, Error> {
        debug!("updating profile");
        self.patch(paths::ME, update).await
    }

    /// Change the authenticated user's password.
    ///
    /// A wrong current password comes back as an API error with status 400.
    #[instrument(skip(self, current_password, new_password))]
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), Error> {
        debug!("changing password");
        let request = ChangePasswordRequest {
            current_password,
            new_password,
        };
        let _: ChangePasswordResponse = self.post(paths::CHANGE_PASSWORD, &request).await?;
        Ok(())
    }

    /// Fetch the current-month dashboard figures.
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardStats, Error> {
        debug!("fetching dashboard stats");
        self.get(paths::DASHBOARD).await
    }
}
