//! printcollor - Client library for the PrintCollor admin REST API.
//!
//! All operations flow through an [`ApiClient`], which owns the session:
//! it attaches the stored bearer token to every request, silently refreshes
//! an expired session exactly once per request, and exposes an in-flight
//! request gauge plus a session-terminated signal for the hosting layer.
//!
//! # Example
//!
//! ```no_run
//! use printcollor::{ApiClient, ApiUrl, Credentials};
//!
//! # async fn example() -> Result<(), printcollor::Error> {
//! let base = ApiUrl::new("https://api.printcollor.com.br")?;
//! let client = ApiClient::new(base);
//! client.login(&Credentials::new("maria", "senha")).await?;
//!
//! for pedido in client.dtf().list().await? {
//!     println!("{}: {} cm", pedido.nome_cliente, pedido.tamanho_cm);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod error;
pub mod http;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, MemoryStore, TokenStore};
pub use error::Error;
pub use http::{ApiClient, LoadingWatcher, SessionState, SessionWatcher};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
