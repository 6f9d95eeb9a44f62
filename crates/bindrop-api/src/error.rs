//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Errors render
//! as the matching status code with a minimal plain-text body; the full error
//! text goes to the server-side logs at the variant's log level and never to
//! the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bindrop_core::{AppError, LogLevel};
use bindrop_storage::StoreError;

/// Wrapper type for AppError to implement IntoResponse.
/// Needed because of the orphan rule: IntoResponse is an external trait and
/// AppError lives in bindrop-core.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<StoreError> for HttpAppError {
    fn from(err: StoreError) -> Self {
        let app = match err {
            StoreError::NotFound(msg) => AppError::NotFound(msg),
            StoreError::WriteFailed(msg) => AppError::Storage(msg),
            StoreError::ReadFailed(msg) => AppError::Storage(msg),
            StoreError::Io(err) => AppError::Storage(format!("IO error: {}", err)),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code = code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code = code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code = code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        log_error(app_error);

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, app_error.client_message()).into_response()
    }
}
