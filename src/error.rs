/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the Argo client

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// Every non-success response of the portal is reported as
/// [`AppError::AuthenticationFailed`], whatever its cause: wrong credentials,
/// an expired token or a protocol version the portal no longer accepts.
#[derive(Debug)]
pub enum AppError {
    /// The portal rejected a request
    AuthenticationFailed {
        /// HTTP status of the rejected response
        status: StatusCode,
        /// Body of the rejected response
        message: String,
    },
    /// A data call was attempted without an active session
    NotLoggedIn,
    /// Transport level failure
    Network(reqwest::Error),
    /// Response body could not be decoded
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
    /// Invalid argument or unexpected response shape
    InvalidInput(String),
}

impl AppError {
    /// Builds an authentication failure from a rejected response
    pub fn authentication_failed(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::AuthenticationFailed {
            status,
            message: message.into(),
        }
    }

    /// Returns `true` if the portal rejected the request
    #[must_use]
    pub fn is_authentication_failed(&self) -> bool {
        matches!(self, AppError::AuthenticationFailed { .. })
    }

    /// Returns `true` if the request was refused locally for lack of a session
    #[must_use]
    pub fn is_not_logged_in(&self) -> bool {
        matches!(self, AppError::NotLoggedIn)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AuthenticationFailed { status, .. } => {
                write!(f, "authentication failed: bad credentials or request ({status})")
            }
            AppError::NotLoggedIn => write!(f, "not logged in"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
