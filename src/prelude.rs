/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Argo Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Argo Client library.
//!
//! ## Usage
//!
//! ```rust
//! use argo_client::prelude::*;
//!
//! let config = Config::with_credentials(Credentials::new("SS00000", "user", "secret"));
//! let client = Client::new_lazy(config);
//! assert!(client.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Argo client
pub use crate::config::{Config, Credentials, ProtocolConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION AND CLIENT
// ============================================================================

/// Session lifecycle
pub use crate::application::auth::{Auth, Session};

/// Client exposing the data endpoints
pub use crate::application::client::Client;

/// Named data endpoints
pub use crate::application::interfaces::student::StudentService;

// ============================================================================
// MODELS
// ============================================================================

/// Login and student card models
pub use crate::model::auth::{LoginResponse, StudentCard, StudentInfo};

/// Known endpoints
pub use crate::model::endpoint::Endpoint;

/// Version renegotiation
pub use crate::model::version::{VersionPolicy, extract_suggested_version};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Date helpers
pub use crate::utils::time::{format_day, today};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date handling
pub use chrono::{NaiveDate, Utc};
