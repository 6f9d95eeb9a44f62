//! Retrieval handler: stream a stored object back to an authenticated caller.
//!
//! The token check happens in middleware before this handler runs; everything
//! here already operates on an authenticated request.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue, Response, StatusCode},
};
use bindrop_core::AppError;
use bindrop_storage::ObjectId;
use futures::StreamExt;
use std::sync::Arc;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
const MAX_DOWNLOAD_FILENAME_LENGTH: usize = 255;

#[tracing::instrument(skip(state), fields(object_id = %id, operation = "download_object"))]
pub async fn download_object(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response<Body>, HttpAppError> {
    // A string that is not 32 hex chars cannot name a stored object. Parsing
    // here also keeps the raw path parameter out of storage path construction.
    let id: ObjectId = id
        .parse()
        .map_err(|_| AppError::NotFound(format!("malformed object id: {}", id)))?;

    let metadata = state
        .store
        .get_metadata(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no object for id {}", id)))?;

    let stream = state.store.get_payload_stream(&id).await?;

    // Once headers are committed, a failed chunk aborts the connection
    // instead of fabricating a successful end of body.
    let body_stream = stream.map(|result| {
        result.map_err(|e| std::io::Error::other(format!("Storage stream error: {}", e)))
    });

    let content_type = HeaderValue::from_str(metadata.mime_type.trim())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| HeaderValue::from_static(FALLBACK_CONTENT_TYPE));

    let content_disposition = format!(
        "attachment; filename=\"{}\"",
        download_filename(&metadata.original_name)
    );

    tracing::debug!(
        id = %id,
        size_bytes = metadata.size,
        "Serving stored object"
    );

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_DISPOSITION, content_disposition.as_str())
        .header(header::CACHE_CONTROL, "private, no-store")
        .header("X-Served-For", "roblox-client")
        .body(Body::from_stream(body_stream))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}

/// Derive a header-safe download filename from the stored original name:
/// base name only, ASCII-safe characters, never empty.
fn download_filename(original_name: &str) -> String {
    let base = std::path::Path::new(original_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    let sanitized: String = base
        .chars()
        .take(MAX_DOWNLOAD_FILENAME_LENGTH)
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches(|c: char| c == '.' || c.is_whitespace()).is_empty() {
        return "file".to_string();
    }

    sanitized
}
