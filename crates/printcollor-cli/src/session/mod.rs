//! Session persistence and client construction.

mod store;

pub use store::FileStore;

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result, bail};

use printcollor::{ApiClient, ApiUrl, SessionState};

use crate::output;

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "PRINTCOLLOR_API_URL";

/// Build a client backed by the persisted session file.
///
/// The base URL is taken from the `--api-url` flag, then the environment,
/// then the stored session.
pub fn load_client(api_url: Option<String>) -> Result<ApiClient> {
    let store = FileStore::open_default()?;
    let url = resolve_api_url(api_url, &store)?;
    let base = ApiUrl::new(&url).context("Invalid API URL")?;
    Ok(ApiClient::with_store(base, Arc::new(store)))
}

pub(crate) fn resolve_api_url(flag: Option<String>, store: &FileStore) -> Result<String> {
    if let Some(url) = flag {
        return Ok(url);
    }
    if let Ok(url) = env::var(API_URL_ENV) {
        if !url.is_empty() {
            return Ok(url);
        }
    }
    if let Some(url) = store.api_url() {
        return Ok(url);
    }
    bail!("no API URL configured; pass --api-url, set {API_URL_ENV}, or log in first")
}

/// Report when a command ended with the session terminated underneath it.
///
/// The client purges stored credentials itself; this just tells the user
/// what happened and what to do next.
pub fn warn_if_terminated(client: &ApiClient) {
    if client.session().current() == SessionState::Terminated {
        output::error("Session expired and could not be refreshed; run `printcollor login`.");
    }
}
