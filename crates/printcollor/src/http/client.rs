//! Authenticated HTTP client with automatic token refresh.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, Request, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, instrument, trace, warn};

use crate::auth::{AccessToken, Credentials, RefreshToken, TokenStore};
use crate::error::{ApiError, AuthError, Error};
use crate::types::ApiUrl;

use super::endpoints::{
    ApiErrorBody, RefreshRequest, RefreshResponse, TOKEN, TOKEN_REFRESH, TokenRequest,
    TokenResponse,
};
use super::loading::{LoadingGauge, LoadingWatcher};
use super::session::{SessionState, SessionWatcher};

/// Authenticated client for the PrintCollor backend.
///
/// Every request carries `Authorization: Bearer <access token>` when a token
/// is stored. A request rejected with 401 triggers at most one silent token
/// refresh followed by one retry of the original request; if recovery fails,
/// stored credentials are purged and the [session signal](ApiClient::session)
/// flips to [`SessionState::Terminated`]. The caller still receives the
/// error — termination never swallows it.
///
/// Clients are cheap to clone (internal `Arc`) and safe to share across
/// tasks. Concurrent 401s coalesce onto a single refresh call.
///
/// # Example
///
/// ```no_run
/// use printcollor::{ApiClient, ApiUrl, Credentials};
///
/// # async fn example() -> Result<(), printcollor::Error> {
/// let base = ApiUrl::new("https://api.printcollor.com.br")?;
/// let client = ApiClient::new(base);
/// client.login(&Credentials::new("maria", "senha")).await?;
///
/// let clientes = client.clientes().list().await?;
/// println!("{} clientes", clientes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base: ApiUrl,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
    loading: LoadingGauge,
    // Serializes refresh attempts so concurrent 401s issue one refresh call.
    refresh_gate: Mutex<()>,
    session_tx: watch::Sender<SessionState>,
}

impl ApiClient {
    /// Create a client with an in-memory token store.
    pub fn new(base: ApiUrl) -> Self {
        Self::with_store(base, Arc::new(crate::auth::MemoryStore::new()))
    }

    /// Create a client reading and writing tokens through the given store.
    ///
    /// The store is the single owner of the session credentials; the client
    /// re-reads it on every dispatch, so tokens written by another holder of
    /// the same store are picked up immediately.
    pub fn with_store(base: ApiUrl, store: Arc<dyn TokenStore>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("printcollor/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        let (session_tx, _) = watch::channel(SessionState::Active);

        Self {
            inner: Arc::new(ClientInner {
                base,
                http,
                store,
                loading: LoadingGauge::new(),
                refresh_gate: Mutex::new(()),
                session_tx,
            }),
        }
    }

    /// Returns the backend base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.inner.base
    }

    /// Returns the token store.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.store
    }

    /// Subscribe to the in-flight request count.
    pub fn loading(&self) -> LoadingWatcher {
        self.inner.loading.subscribe()
    }

    /// Subscribe to the session lifecycle.
    pub fn session(&self) -> SessionWatcher {
        SessionWatcher {
            rx: self.inner.session_tx.subscribe(),
        }
    }

    // ========================================================================
    // Session operations
    // ========================================================================

    /// Authenticate and store the issued token pair.
    ///
    /// Posts the credentials to `token/`. On success the access and refresh
    /// tokens are written to the store under their fixed keys. Failures
    /// propagate untouched; the retry logic never applies to login itself.
    #[instrument(skip(self, credentials), fields(base = %self.inner.base, username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<(), Error> {
        info!("logging in");
        let _guard = self.inner.loading.start();

        let url = self.inner.base.endpoint_url(TOKEN);
        let request = TokenRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response = self.inner.http.post(&url).json(&request).send().await?;
        let tokens: TokenResponse = Self::parse_json(response).await?;

        self.inner
            .store
            .store_access_token(&AccessToken::new(tokens.access));
        self.inner
            .store
            .store_refresh_token(&RefreshToken::new(tokens.refresh));
        self.inner.session_tx.send_replace(SessionState::Active);

        debug!("login succeeded, tokens stored");
        Ok(())
    }

    /// Clear stored credentials and terminate the session.
    ///
    /// No network call is made. Requests issued afterwards are dispatched
    /// without an `Authorization` header.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        info!("logging out");
        self.terminate();
    }

    /// Explicitly refresh the access token.
    ///
    /// The retry path calls this internally on 401; it is public so hosts
    /// can refresh a persisted session up front.
    ///
    /// # Errors
    ///
    /// [`AuthError::RefreshTokenMissing`] if no refresh token is stored; a
    /// rejected refresh terminates the session.
    #[instrument(skip(self), fields(base = %self.inner.base))]
    pub async fn refresh(&self) -> Result<(), Error> {
        let _gate = self.inner.refresh_gate.lock().await;

        let refresh_token = self
            .inner
            .store
            .refresh_token()
            .ok_or(AuthError::RefreshTokenMissing)?;

        match self.call_refresh(&refresh_token).await {
            Ok(()) => Ok(()),
            Err(Error::Api(err)) => {
                warn!(status = err.status, "refresh rejected, terminating session");
                self.terminate();
                Err(AuthError::SessionTerminated(err).into())
            }
            Err(other) => Err(other),
        }
    }

    // ========================================================================
    // Request helpers
    // ========================================================================

    /// GET a JSON resource.
    pub async fn get<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let request = self
            .inner
            .http
            .get(self.inner.base.endpoint_url(path))
            .build()?;
        let response = self.dispatch(request).await?;
        Ok(response.json().await?)
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_with_query<Q, R>(&self, path: &str, query: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        trace!(?query, "query parameters");
        let request = self
            .inner
            .http
            .get(self.inner.base.endpoint_url(path))
            .query(query)
            .build()?;
        let response = self.dispatch(request).await?;
        Ok(response.json().await?)
    }

    /// GET a binary body (the backend's generated PDFs).
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, Error> {
        let request = self
            .inner
            .http
            .get(self.inner.base.endpoint_url(path))
            .build()?;
        let response = self.dispatch(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// POST a JSON body, expecting a JSON response.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = self
            .inner
            .http
            .post(self.inner.base.endpoint_url(path))
            .json(body)
            .build()?;
        let response = self.dispatch(request).await?;
        Ok(response.json().await?)
    }

    /// PATCH a JSON body, expecting the updated resource back.
    pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = self
            .inner
            .http
            .patch(self.inner.base.endpoint_url(path))
            .json(body)
            .build()?;
        let response = self.dispatch(request).await?;
        Ok(response.json().await?)
    }

    /// DELETE a resource. The backend answers 204 with no body.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let request = self
            .inner
            .http
            .request(Method::DELETE, self.inner.base.endpoint_url(path))
            .build()?;
        self.dispatch(request).await?;
        Ok(())
    }

    // ========================================================================
    // Dispatch and recovery
    // ========================================================================

    /// Send a request with the failure-and-retry contract.
    ///
    /// The in-flight gauge is held for the whole settlement, retry included,
    /// so it drops exactly once per original dispatch. The retry path is
    /// straight-line: there is no branch that retries twice.
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    async fn dispatch(&self, mut request: Request) -> Result<reqwest::Response, Error> {
        let _guard = self.inner.loading.start();

        // Token at dispatch time. Absent token (e.g. after logout) means the
        // request goes out unauthenticated.
        let access = self.inner.store.access_token();
        if let Some(ref token) = access {
            set_bearer(&mut request, token);
        }

        // Retained envelope for the single retry. JSON bodies always clone.
        let retry = request.try_clone();

        debug!("dispatching request");
        let response = self.inner.http.execute(request).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let failure = Self::parse_error(response).await;
        if status != StatusCode::UNAUTHORIZED {
            return Err(failure.into());
        }

        let Some(mut retry) = retry else {
            // Streaming bodies cannot be redispatched; behave as already
            // retried and propagate.
            return Err(failure.into());
        };

        let fresh = self.recover(access, failure).await?;
        set_bearer(&mut retry, &fresh);

        debug!("retrying request with refreshed token");
        let response = self.inner.http.execute(retry).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let failure = Self::parse_error(response).await;
        if status == StatusCode::UNAUTHORIZED {
            // The refreshed token was rejected too; the session is beyond
            // recovery.
            warn!("retried request rejected, terminating session");
            self.terminate();
            return Err(AuthError::SessionTerminated(failure).into());
        }
        Err(failure.into())
    }

    /// Obtain a usable access token after a 401.
    ///
    /// Refresh attempts are serialized: the first failing request performs
    /// the refresh while concurrent 401s wait on the gate, then find the
    /// stored token already changed and reuse it without their own refresh
    /// call.
    async fn recover(
        &self,
        stale: Option<AccessToken>,
        original: ApiError,
    ) -> Result<AccessToken, Error> {
        let _gate = self.inner.refresh_gate.lock().await;

        if let Some(current) = self.inner.store.access_token() {
            let changed = stale.map_or(true, |t| t.as_str() != current.as_str());
            if changed {
                debug!("token already refreshed by a concurrent request");
                return Ok(current);
            }
        }

        let Some(refresh_token) = self.inner.store.refresh_token() else {
            warn!("401 with no refresh token stored, terminating session");
            self.terminate();
            return Err(AuthError::SessionTerminated(original).into());
        };

        if let Err(err) = self.call_refresh(&refresh_token).await {
            warn!(error = %err, "token refresh failed, terminating session");
            self.terminate();
            // The caller sees the original authorization failure, not the
            // refresh call's.
            return Err(AuthError::SessionTerminated(original).into());
        }

        self.inner
            .store
            .access_token()
            .ok_or_else(|| AuthError::SessionTerminated(original).into())
    }

    /// POST `token/refresh/` and store the rotated tokens.
    async fn call_refresh(&self, refresh_token: &RefreshToken) -> Result<(), Error> {
        info!("refreshing access token");

        let url = self.inner.base.endpoint_url(TOKEN_REFRESH);
        let request = RefreshRequest {
            refresh: refresh_token.as_str(),
        };

        let response = self.inner.http.post(&url).json(&request).send().await?;
        let refreshed: RefreshResponse = Self::parse_json(response).await?;

        self.inner
            .store
            .store_access_token(&AccessToken::new(refreshed.access));
        if let Some(rotated) = refreshed.refresh {
            self.inner
                .store
                .store_refresh_token(&RefreshToken::new(rotated));
        }

        debug!("access token refreshed");
        Ok(())
    }

    fn terminate(&self) {
        self.inner.store.clear();
        self.inner.session_tx.send_replace(SessionState::Terminated);
    }

    /// Parse a JSON body or map the error response.
    async fn parse_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(response.json::<R>().await?)
        } else {
            Err(Self::parse_error(response).await.into())
        }
    }

    /// Parse an error response body.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        match response.json::<ApiErrorBody>().await {
            Ok(body) => ApiError::new(status, body.into_detail()),
            Err(_) => ApiError::new(status, None),
        }
    }
}

fn set_bearer(request: &mut Request, token: &AccessToken) {
    let value = format!("Bearer {}", token.as_str());
    request.headers_mut().insert(
        AUTHORIZATION,
        HeaderValue::from_str(&value).expect("invalid token characters"),
    );
}

// Custom Debug impl that hides the token store contents
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.inner.base)
            .field("store", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let base = ApiUrl::new("https://api.printcollor.com.br").unwrap();
        let client = ApiClient::new(base.clone());
        assert_eq!(client.base().as_str(), base.as_str());
    }

    #[test]
    fn debug_hides_store() {
        let base = ApiUrl::new("https://api.printcollor.com.br").unwrap();
        let client = ApiClient::new(base);
        client
            .store()
            .store_access_token(&AccessToken::new("secret-token"));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-token"));
    }
}
