//! Application setup: route wiring and server startup.

pub mod routes;
pub mod server;
