//! File-backed token store.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use printcollor::TokenStore;
use printcollor::auth::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// On-disk session layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    api_url: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

/// A [`TokenStore`] persisted as a JSON file.
///
/// Every mutation is written through immediately, so the token refreshed in
/// the middle of one command is available to the next. The file is created
/// with mode 0600 on Unix.
pub struct FileStore {
    path: PathBuf,
    state: RwLock<StoredSession>,
}

impl FileStore {
    /// Open the session file under the platform data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(default_path()?)
    }

    /// Open (or initialize) a session file at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = if path.exists() {
            let json = fs::read_to_string(&path).context("Failed to read session file")?;
            serde_json::from_str(&json).context("Invalid session file")?
        } else {
            StoredSession::default()
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// The backend base URL recorded at login, if any.
    pub fn api_url(&self) -> Option<String> {
        self.state.read().unwrap().api_url.clone()
    }

    /// Record the backend base URL.
    pub fn set_api_url(&self, url: &str) {
        self.state.write().unwrap().api_url = Some(url.to_string());
        self.persist_logged();
    }

    fn persist(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context("Failed to create data directory")?;
        }

        let json = serde_json::to_string_pretty(&*self.state.read().unwrap())?;
        fs::write(&self.path, &json).context("Failed to write session file")?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }

    // TokenStore mutations cannot return errors; a failed write leaves the
    // in-memory state authoritative for the rest of the process.
    fn persist_logged(&self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, "failed to persist session file");
        }
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let state = self.state.read().unwrap();
        match key {
            ACCESS_TOKEN_KEY => state.access_token.clone(),
            REFRESH_TOKEN_KEY => state.refresh_token.clone(),
            _ => None,
        }
    }

    fn set(&self, key: &str, value: &str) {
        {
            let mut state = self.state.write().unwrap();
            match key {
                ACCESS_TOKEN_KEY => state.access_token = Some(value.to_string()),
                REFRESH_TOKEN_KEY => state.refresh_token = Some(value.to_string()),
                _ => return,
            }
        }
        self.persist_logged();
    }

    fn remove(&self, key: &str) {
        {
            let mut state = self.state.write().unwrap();
            match key {
                ACCESS_TOKEN_KEY => state.access_token = None,
                REFRESH_TOKEN_KEY => state.refresh_token = None,
                _ => return,
            }
        }
        self.persist_logged();
    }

    // The API URL survives a logout; only credentials are purged.
    fn clear(&self) {
        {
            let mut state = self.state.write().unwrap();
            state.access_token = None;
            state.refresh_token = None;
        }
        self.persist_logged();
    }
}

fn default_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "printcollor").context("Could not determine config directory")?;

    Ok(dirs.data_dir().join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_tokens_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set_api_url("https://api.printcollor.com.br");
        store.set(ACCESS_TOKEN_KEY, "A1");
        store.set(REFRESH_TOKEN_KEY, "R1");

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.api_url().as_deref(),
            Some("https://api.printcollor.com.br")
        );
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY).as_deref(), Some("A1"));
        assert_eq!(reopened.get(REFRESH_TOKEN_KEY).as_deref(), Some("R1"));
    }

    #[test]
    fn clear_keeps_api_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set_api_url("https://api.printcollor.com.br");
        store.set(ACCESS_TOKEN_KEY, "A1");
        store.clear();

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.get(ACCESS_TOKEN_KEY).is_none());
        assert!(reopened.api_url().is_some());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("session.json")).unwrap();

        store.set("something_else", "value");
        assert!(store.get("something_else").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set(ACCESS_TOKEN_KEY, "A1");

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
