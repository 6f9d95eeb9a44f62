//! Storage abstraction trait
//!
//! The filesystem-as-database pattern lives behind this trait so a different
//! durable backend can be swapped in without touching the HTTP components,
//! and so the path-safety invariant stays in one place.

use crate::ObjectId;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

use bindrop_core::ObjectMetadata;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Chunked payload stream returned by [`ObjectStore::get_payload_stream`].
pub type PayloadStream = Pin<Box<dyn Stream<Item = Result<Bytes, StoreError>> + Send>>;

/// Storage abstraction for write-once objects.
///
/// Implementations must guarantee that a concurrent reader never observes a
/// partial object: `put` persists the payload before the metadata, and every
/// read treats a missing or unreadable metadata record as "absent" even when
/// a payload file exists.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Persist payload and metadata for a freshly generated id.
    ///
    /// Objects are immutable: each id is written exactly once and never
    /// updated, so no cross-request locking is required.
    async fn put(
        &self,
        id: &ObjectId,
        payload: &[u8],
        metadata: &ObjectMetadata,
    ) -> StoreResult<()>;

    /// Load the metadata record for an id.
    ///
    /// Returns `Ok(None)` when the object is absent, which includes a missing
    /// payload, a missing metadata record, or a metadata record that fails to
    /// parse. Partial state is never surfaced as "found".
    async fn get_metadata(&self, id: &ObjectId) -> StoreResult<Option<ObjectMetadata>>;

    /// Open the payload for streaming.
    async fn get_payload_stream(&self, id: &ObjectId) -> StoreResult<PayloadStream>;

    /// Check whether both artifacts of an object are present.
    async fn exists(&self, id: &ObjectId) -> StoreResult<bool>;
}
