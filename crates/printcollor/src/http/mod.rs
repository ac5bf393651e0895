//! Authenticated HTTP client.
//!
//! This module provides the client core: bearer-token injection, the
//! 401 → refresh → retry-once contract, the in-flight request gauge, and
//! the session lifecycle signal.

mod client;
mod endpoints;
mod loading;
mod session;

pub use client::ApiClient;
pub use loading::LoadingWatcher;
pub use session::{SessionState, SessionWatcher};
