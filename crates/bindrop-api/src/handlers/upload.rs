//! Ingest handler: accept a multipart upload, persist it, return its id.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bindrop_core::{AppError, ObjectMetadata};
use bindrop_storage::ObjectId;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub id: String,
    pub download_url: String,
}

#[tracing::instrument(skip(state, multipart), fields(operation = "upload_object"))]
pub async fn upload_object(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let (payload, original_name, mime_type) = extract_multipart_file(multipart).await?;

    if payload.is_empty() {
        return Err(AppError::BadRequest("No file uploaded".to_string()).into());
    }

    // The body limit layer rejects oversized requests mid-read; this check
    // covers payloads that fit the envelope but exceed the configured max.
    if payload.len() > state.config.max_upload_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds maximum allowed size of {} bytes",
            state.config.max_upload_bytes
        ))
        .into());
    }

    let id = ObjectId::generate();
    let metadata = ObjectMetadata::new(
        id.as_str().to_string(),
        original_name,
        mime_type,
        payload.len() as u64,
    );

    state.store.put(&id, &payload, &metadata).await?;

    tracing::info!(
        id = %id,
        size_bytes = metadata.size,
        "Object ingested"
    );

    Ok(Json(UploadResponse {
        download_url: format!("/download/{}", id),
        id: id.to_string(),
    }))
}

/// Extract payload bytes, filename, and content type from the multipart form.
/// Exactly one field named "file" is accepted.
///
/// Both filename and content type are untrusted; they travel only into the
/// metadata record and back out as response headers, never into paths.
async fn extract_multipart_file(
    mut multipart: Multipart,
) -> Result<(Vec<u8>, String, String), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == "file" {
            if file_data.is_some() {
                return Err(AppError::BadRequest(
                    "Multiple file fields are not allowed; send exactly one field named 'file'"
                        .to_string(),
                ));
            }
            filename = field.file_name().map(|s: &str| s.to_string());
            content_type = field.content_type().map(|s: &str| s.to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?;

            file_data = Some(data.to_vec());
        }
    }

    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    let original_name = filename.unwrap_or_else(|| "unknown".to_string());
    let content_type = content_type.unwrap_or_else(|| "application/octet-stream".to_string());

    Ok((file_data, original_name, content_type))
}
