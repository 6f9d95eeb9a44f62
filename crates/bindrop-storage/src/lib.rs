//! Bindrop Storage Library
//!
//! Object persistence for bindrop: the `ObjectStore` trait and the local
//! filesystem implementation.
//!
//! # Storage layout
//!
//! Each stored object is a pair of files under the storage root, keyed by a
//! server-generated [`ObjectId`]:
//!
//! - `{id}.bin` — the raw payload
//! - `{id}.json` — the metadata record
//!
//! Paths are built only from a validated `ObjectId` plus those fixed
//! suffixes. No client-supplied string (filename, content type) ever reaches
//! path construction, so path traversal is impossible by construction rather
//! than by sanitization.
//!
//! Metadata is written after the payload and is required by every read path,
//! which makes its existence the commit signal for the whole object: a crash
//! between the two writes leaves an orphan `.bin` that readers treat as
//! absent.

pub mod id;
pub mod local;
pub mod store;

pub use id::{ObjectId, ParseObjectIdError};
pub use local::LocalObjectStore;
pub use store::{ObjectStore, PayloadStream, StoreError, StoreResult};
