//! Configuration module
//!
//! All settings are read from the environment exactly once at startup and
//! carried in an immutable `Config` that is injected into the components.
//! Nothing reads ambient environment state at request time.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORAGE_PATH: &str = "storage";
const DEFAULT_UPLOAD_MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Listen port for the HTTP server.
    pub port: u16,
    /// Root directory for stored objects. Reachable only through the
    /// authenticated download endpoint, never served statically.
    pub storage_path: PathBuf,
    /// Shared secret required by the download endpoint.
    pub roblox_token: String,
    /// Maximum accepted payload size in bytes.
    pub max_upload_bytes: usize,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let config = Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            storage_path: env::var("STORAGE_PATH")
                .unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string())
                .into(),
            roblox_token: env::var("ROBLOX_TOKEN").map_err(|_| {
                anyhow::anyhow!("ROBLOX_TOKEN must be set to the download shared secret")
            })?,
            max_upload_bytes: env::var("UPLOAD_MAX_FILE_BYTES")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_MAX_FILE_BYTES.to_string())
                .parse()
                .unwrap_or(DEFAULT_UPLOAD_MAX_FILE_BYTES),
            environment,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.roblox_token.trim().is_empty() || self.roblox_token == "change_me" {
            return Err(anyhow::anyhow!(
                "ROBLOX_TOKEN must be set to a real secret, not empty or 'change_me'"
            ));
        }

        if self.max_upload_bytes == 0 {
            return Err(anyhow::anyhow!(
                "UPLOAD_MAX_FILE_BYTES must be greater than zero"
            ));
        }

        Ok(())
    }
}
