//! Error types module
//!
//! All failures are unified under the `AppError` enum. Each variant carries
//! enough metadata (HTTP status, machine-readable code, log level, client
//! message) for the API layer to render a response without leaking internal
//! detail; the full error text only ever reaches the server-side logs.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected client errors like a missing upload field
    Debug,
    /// Rejected authentication attempts
    Warn,
    /// Unexpected failures (storage I/O, response assembly)
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::Forbidden => 403,
            AppError::NotFound(_) => 404,
            AppError::Storage(_) => 500,
            AppError::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Forbidden => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::BadRequest(_) | AppError::NotFound(_) => LogLevel::Debug,
            AppError::Forbidden => LogLevel::Warn,
            AppError::Storage(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }

    /// Client-facing body text. Bad-request messages are authored for the
    /// client; everything else collapses to a fixed phrase so the response
    /// carries no internal diagnostics and no existence hints.
    pub fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Forbidden => "Forbidden".to_string(),
            AppError::NotFound(_) => "Not found".to_string(),
            AppError::Storage(_) | AppError::Internal(_) => "Server error".to_string(),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}
