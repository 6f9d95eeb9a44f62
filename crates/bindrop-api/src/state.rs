//! Application state.

use bindrop_core::Config;
use bindrop_storage::ObjectStore;
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// The configuration is read once at startup and immutable from then on;
/// handlers never consult the environment directly. The store is behind a
/// trait object so tests (or a later backend) can substitute implementations.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ObjectStore>) -> Self {
        AppState {
            config: Arc::new(config),
            store,
        }
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
