//! Bindrop API Library
//!
//! This crate provides the HTTP handlers, the download auth middleware, and
//! the application setup (routes, server, telemetry).

pub mod auth;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use error::HttpAppError;
pub use state::AppState;
