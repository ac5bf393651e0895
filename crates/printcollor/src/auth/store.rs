//! Token storage.
//!
//! Session credentials live in a key-value store under two fixed keys,
//! matching the layout the admin front end kept in browser storage. The
//! store is the single owner of the tokens; the HTTP client reads and writes
//! through it on every dispatch so concurrent refreshes always observe the
//! latest value.

use std::collections::HashMap;
use std::sync::RwLock;

use super::tokens::{AccessToken, RefreshToken};

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Key-value storage for session credentials.
///
/// Implementations must be safe to share across tasks; the client calls
/// these methods from concurrent request completions. All operations are
/// synchronous and must not block for long (the CLI's file-backed store
/// writes a small JSON file; the default [`MemoryStore`] is lock-only).
pub trait TokenStore: Send + Sync {
    /// Read a value by key.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value under a key.
    fn set(&self, key: &str, value: &str);

    /// Remove a single key.
    fn remove(&self, key: &str);

    /// Remove all stored values.
    fn clear(&self);

    /// Returns the stored access token, if any.
    fn access_token(&self) -> Option<AccessToken> {
        self.get(ACCESS_TOKEN_KEY).map(AccessToken::new)
    }

    /// Returns the stored refresh token, if any.
    fn refresh_token(&self) -> Option<RefreshToken> {
        self.get(REFRESH_TOKEN_KEY).map(RefreshToken::new)
    }

    /// Store a new access token.
    fn store_access_token(&self, token: &AccessToken) {
        self.set(ACCESS_TOKEN_KEY, token.as_str());
    }

    /// Store a new refresh token.
    fn store_refresh_token(&self, token: &RefreshToken) {
        self.set(REFRESH_TOKEN_KEY, token.as_str());
    }
}

/// In-process token store backed by a `HashMap`.
///
/// This is the default store for library use and tests. Processes that need
/// the session to survive a restart provide their own [`TokenStore`]
/// implementation (the CLI persists to a JSON file).
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.write().unwrap().remove(key);
    }

    fn clear(&self) {
        self.values.write().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_reads_tokens_under_fixed_keys() {
        let store = MemoryStore::new();
        store.store_access_token(&AccessToken::new("A1"));
        store.store_refresh_token(&RefreshToken::new("R1"));

        assert_eq!(store.get(ACCESS_TOKEN_KEY).as_deref(), Some("A1"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).as_deref(), Some("R1"));
        assert_eq!(store.access_token().unwrap().as_str(), "A1");
        assert_eq!(store.refresh_token().unwrap().as_str(), "R1");
    }

    #[test]
    fn clear_removes_everything() {
        let store = MemoryStore::new();
        store.store_access_token(&AccessToken::new("A1"));
        store.store_refresh_token(&RefreshToken::new("R1"));

        store.clear();

        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn remove_is_selective() {
        let store = MemoryStore::new();
        store.store_access_token(&AccessToken::new("A1"));
        store.store_refresh_token(&RefreshToken::new("R1"));

        store.remove(ACCESS_TOKEN_KEY);

        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_some());
    }
}
