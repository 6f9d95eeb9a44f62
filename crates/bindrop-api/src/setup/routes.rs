//! Route configuration and setup

use crate::auth::{self, AuthState};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Headroom for multipart framing on top of the payload size limit. Uploads
/// between the payload max and this envelope are rejected by the explicit
/// size check with a 400, matching the error contract of the upload endpoint.
const MULTIPART_ENVELOPE_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the application router.
///
/// `/download/{id}` sits behind the token middleware so the shared-secret
/// check always runs before any store access. The storage root itself is
/// never mounted as static content.
pub fn build_router(state: Arc<AppState>) -> Router {
    let auth_state = Arc::new(AuthState {
        download_token: state.config.roblox_token.clone(),
    });

    let download_routes = Router::new()
        .route("/download/{id}", get(handlers::download::download_object))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth::require_download_token,
        ));

    let body_limit = state.config.max_upload_bytes + MULTIPART_ENVELOPE_OVERHEAD_BYTES;

    Router::new()
        .route("/upload", post(handlers::upload::upload_object))
        .route("/health", get(handlers::health::health))
        .merge(download_routes)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
