use std::sync::Arc;

use bindrop_api::{setup, state::AppState, telemetry};
use bindrop_core::Config;
use bindrop_storage::LocalObjectStore;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init_telemetry();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the object store (creates the storage root if missing)
    let store = LocalObjectStore::new(&config.storage_path).await?;

    let state = Arc::new(AppState::new(config, Arc::new(store)));
    let router = setup::routes::build_router(state.clone());

    // Start the server
    setup::server::start_server(&state.config, router).await?;

    Ok(())
}
