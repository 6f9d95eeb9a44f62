//! Download authentication middleware.
//!
//! The shared-secret check runs before the handler, so nothing touches the
//! store for an unauthenticated request. A missing or wrong token always
//! produces the same 403 response whether or not the requested id exists;
//! the status/body pair must not become an existence oracle.

use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bindrop_core::AppError;
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Header carrying the shared secret on download requests.
pub const TOKEN_HEADER: &str = "X-Roblox-Token";

#[derive(Clone)]
pub struct AuthState {
    pub download_token: String,
}

/// Constant-time string comparison. The length check short-circuits, which
/// leaks only the secret's length, not its content.
fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

pub async fn require_download_token(
    State(auth_state): State<Arc<AuthState>>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok());

    match presented {
        Some(token) if secure_compare(token, &auth_state.download_token) => {
            next.run(request).await
        }
        _ => HttpAppError(AppError::Forbidden).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_compare_matches_equal_strings() {
        assert!(secure_compare("topsecret", "topsecret"));
    }

    #[test]
    fn secure_compare_rejects_differences() {
        assert!(!secure_compare("topsecret", "topsecreT"));
        assert!(!secure_compare("topsecret", "topsecret "));
        assert!(!secure_compare("", "topsecret"));
    }
}
