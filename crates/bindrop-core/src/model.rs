//! Stored object metadata model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata record persisted next to each payload as `{id}.json`.
///
/// `original_name` and `mime_type` are client-supplied and opaque: they are
/// only ever echoed in response headers, never interpreted as paths or
/// trusted type declarations. JSON field names are camelCase so records stay
/// readable by tooling written against the original on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    pub id: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl ObjectMetadata {
    pub fn new(id: String, original_name: String, mime_type: String, size: u64) -> Self {
        ObjectMetadata {
            id,
            original_name,
            mime_type,
            size,
            uploaded_at: Utc::now(),
        }
    }
}
