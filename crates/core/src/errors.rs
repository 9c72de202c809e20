//! Core error types for the TourDesk application.
//!
//! This module defines transport-agnostic error types. Gateway-specific errors
//! (from HTTP status codes, Postgres error codes, etc.) are converted to these
//! types by the gateway layer.

use chrono::ParseError as ChronoParseError;
use std::num::ParseFloatError;
use thiserror::Error;

use crate::packages::PackageError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the admin console.
///
/// This enum represents all possible errors that can occur in the application.
/// Transport-specific errors are wrapped in string form to keep this type
/// backend-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Gateway operation failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Package operation failed: {0}")]
    Package(#[from] PackageError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for remote data operations.
///
/// This enum uses `String` for all error details, allowing the gateway layer
/// to convert its transport-specific errors (reqwest, PostgREST error bodies,
/// auth responses, etc.) into this format.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request could not be completed (network failure, timeout, or a
    /// remote error with no more specific mapping).
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The credentials attached to the request were missing or rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique or foreign key constraint was violated.
    #[error("Constraint violation: {0}")]
    Conflict(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// An authentication endpoint returned an error.
    #[error("Auth operation failed: {0}")]
    Auth(String),

    /// A file storage operation failed.
    #[error("Storage operation failed: {0}")]
    Storage(String),

    /// The gateway configuration is incomplete or malformed.
    #[error("Invalid gateway configuration: {0}")]
    InvalidConfig(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
