//! Bindrop core library
//!
//! Shared types for the bindrop object store: the application configuration,
//! the error taxonomy, and the stored object metadata model.

pub mod config;
pub mod error;
pub mod model;

pub use config::Config;
pub use error::{AppError, LogLevel};
pub use model::ObjectMetadata;
