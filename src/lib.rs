/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Argo Client
//!
//! A client for the Argo ScuolaNext family REST API.
//!
//! The crate takes care of the session lifecycle (credential exchange, the
//! student card lookup and the identifying headers every call must carry) and
//! exposes the read-only endpoints of the portal as plain JSON.
//!
//! When the portal rejects the protocol version announced by the client, the
//! suggested version is extracted from the error payload and the request is
//! retried once with it.
//!
//! ## Example
//!
//! ```ignore
//! use argo_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new()).await?;
//!
//!     let absences = client.absences().await?;
//!     println!("{absences:#}");
//!     Ok(())
//! }
//! ```

/// Application layer: configuration, session lifecycle and the client
pub mod application;
/// Constants shared across the crate
pub mod constants;
/// Error types
pub mod error;
/// Wire models and HTTP helpers
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Miscellaneous helpers
pub mod utils;

/// Re-export of the configuration module under a shorter path
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
