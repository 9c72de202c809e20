//! Gateway-specific error types for the hosted REST backend.
//!
//! This module provides error types that wrap transport and API-level
//! failures and convert them to the transport-agnostic error types defined
//! in `tourdesk_core`.

use thiserror::Error;
use tourdesk_core::errors::{Error, GatewayError};

/// SQLSTATE code for unique constraint violations surfaced by the store.
const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE code for foreign key violations surfaced by the store.
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Gateway-specific errors that wrap reqwest and API response types.
///
/// These errors are internal to the gateway layer and are converted to
/// `tourdesk_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum RestError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    Url(String),

    #[error("Refusing to run an unfiltered {verb} against '{relation}'")]
    UnfilteredMutation {
        verb: &'static str,
        relation: String,
    },

    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Failed to decode '{relation}' response: {message}")]
    Decode { relation: String, message: String },

    #[error("Invalid gateway configuration: {0}")]
    Config(String),
}

/// The error body the REST layer returns for failed requests.
#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl From<RestError> for GatewayError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Transport(e) => GatewayError::RequestFailed(e.to_string()),
            RestError::Url(e) => GatewayError::RequestFailed(e),
            RestError::UnfilteredMutation { .. } => GatewayError::RequestFailed(err.to_string()),
            RestError::Api {
                status,
                ref code,
                ref message,
            } => {
                let code = code.as_deref();
                match status {
                    401 | 403 => GatewayError::Unauthorized(message.clone()),
                    404 => GatewayError::NotFound(message.clone()),
                    409 => GatewayError::Conflict(message.clone()),
                    _ if code == Some(SQLSTATE_UNIQUE_VIOLATION)
                        || code == Some(SQLSTATE_FOREIGN_KEY_VIOLATION) =>
                    {
                        GatewayError::Conflict(message.clone())
                    }
                    _ => GatewayError::RequestFailed(err.to_string()),
                }
            }
            RestError::Decode { .. } => GatewayError::Decode(err.to_string()),
            RestError::Config(e) => GatewayError::InvalidConfig(e),
        }
    }
}

impl From<RestError> for Error {
    fn from(err: RestError) -> Self {
        Error::Gateway(GatewayError::from(err))
    }
}
