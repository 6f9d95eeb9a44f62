use crate::store::{ObjectStore, PayloadStream, StoreError, StoreResult};
use crate::ObjectId;
use async_trait::async_trait;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use bindrop_core::ObjectMetadata;

/// Local filesystem object store.
///
/// Two files per object under the base directory: `{id}.bin` then
/// `{id}.json`. The metadata write commits the object; readers require both
/// files, so an interrupted ingest is never observable as a stored object.
#[derive(Clone)]
pub struct LocalObjectStore {
    base_path: PathBuf,
}

impl LocalObjectStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    pub async fn new(base_path: impl Into<PathBuf>) -> StoreResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StoreError::WriteFailed(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalObjectStore { base_path })
    }

    fn payload_path(&self, id: &ObjectId) -> PathBuf {
        self.base_path.join(id.payload_file())
    }

    fn metadata_path(&self, id: &ObjectId) -> PathBuf {
        self.base_path.join(id.metadata_file())
    }

    async fn write_file(path: &Path, data: &[u8]) -> StoreResult<()> {
        let mut file = fs::File::create(path).await.map_err(|e| {
            StoreError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StoreError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StoreError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(
        &self,
        id: &ObjectId,
        payload: &[u8],
        metadata: &ObjectMetadata,
    ) -> StoreResult<()> {
        let payload_path = self.payload_path(id);
        let metadata_path = self.metadata_path(id);
        let start = std::time::Instant::now();

        // Payload first. The metadata write below is the commit signal; if
        // this write fails or the request is abandoned, no reader can ever
        // resolve the object.
        Self::write_file(&payload_path, payload).await?;

        let metadata_json = serde_json::to_vec_pretty(metadata)
            .map_err(|e| StoreError::WriteFailed(format!("Failed to encode metadata: {}", e)))?;
        Self::write_file(&metadata_path, &metadata_json).await?;

        tracing::info!(
            id = %id,
            size_bytes = payload.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Stored object"
        );

        Ok(())
    }

    async fn get_metadata(&self, id: &ObjectId) -> StoreResult<Option<ObjectMetadata>> {
        let payload_path = self.payload_path(id);
        let metadata_path = self.metadata_path(id);

        // Both artifacts are required; a payload without metadata is an
        // uncommitted ingest, metadata without payload must never be served.
        if !fs::try_exists(&payload_path).await.unwrap_or(false) {
            return Ok(None);
        }

        let raw = match fs::read(&metadata_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::ReadFailed(format!(
                    "Failed to read metadata {}: {}",
                    metadata_path.display(),
                    e
                )))
            }
        };

        match serde_json::from_slice::<ObjectMetadata>(&raw) {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) => {
                tracing::warn!(
                    id = %id,
                    error = %e,
                    "Unparseable metadata record, treating object as absent"
                );
                Ok(None)
            }
        }
    }

    async fn get_payload_stream(&self, id: &ObjectId) -> StoreResult<PayloadStream> {
        let path = self.payload_path(id);

        let file = match fs::File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.to_string()))
            }
            Err(e) => {
                return Err(StoreError::ReadFailed(format!(
                    "Failed to open payload {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let reader = tokio_util::io::ReaderStream::new(file);

        let object_id = id.to_string();
        let stream = reader.map(move |result| {
            result.map_err(|e| {
                tracing::error!(id = %object_id, error = %e, "Payload stream read error");
                StoreError::ReadFailed(format!("Failed to read chunk: {}", e))
            })
        });

        Ok(Box::pin(stream))
    }

    async fn exists(&self, id: &ObjectId) -> StoreResult<bool> {
        let payload = fs::try_exists(self.payload_path(id)).await.unwrap_or(false);
        let metadata = fs::try_exists(self.metadata_path(id)).await.unwrap_or(false);
        Ok(payload && metadata)
    }
}
