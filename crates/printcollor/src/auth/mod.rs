//! Authentication primitives: credentials, tokens, and token storage.
//!
//! Session credentials are owned by a [`TokenStore`]; the HTTP client reads
//! and writes through the store and keeps no private copy.

mod credentials;
mod store;
mod tokens;

pub use credentials::Credentials;
pub use store::{ACCESS_TOKEN_KEY, MemoryStore, REFRESH_TOKEN_KEY, TokenStore};
pub use tokens::{AccessToken, RefreshToken};
