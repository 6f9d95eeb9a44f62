//! Test helpers: build AppState and router for integration tests.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use bindrop_api::setup::routes::build_router;
use bindrop_api::state::AppState;
use bindrop_core::Config;
use bindrop_storage::LocalObjectStore;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Shared secret used by the test configuration.
pub const TEST_TOKEN: &str = "test-download-token";

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Test application: server plus the tempdir-backed storage root.
pub struct TestApp {
    pub server: TestServer,
    pub storage_root: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup a test app with an isolated storage root and the default size limit.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_limit(DEFAULT_MAX_UPLOAD_BYTES).await
}

/// Setup a test app with a custom maximum upload size.
pub async fn setup_test_app_with_limit(max_upload_bytes: usize) -> TestApp {
    let temp_dir = TempDir::new().expect("create temp dir");
    let storage_root = temp_dir.path().join("objects");

    let config = Config {
        port: 0,
        storage_path: storage_root.clone(),
        roblox_token: TEST_TOKEN.to_string(),
        max_upload_bytes,
        environment: "test".to_string(),
    };
    config.validate().expect("test config is valid");

    let store = LocalObjectStore::new(&storage_root)
        .await
        .expect("create local store");

    let state = Arc::new(AppState::new(config, Arc::new(store)));
    let server = TestServer::new(build_router(state)).expect("start test server");

    TestApp {
        server,
        storage_root,
        _temp_dir: temp_dir,
    }
}

/// Multipart form with a single "file" field, as the upload endpoint expects.
pub fn upload_form(bytes: &[u8], filename: &str, mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes.to_vec())
            .file_name(filename)
            .mime_type(mime_type),
    )
}

/// File names currently present in the storage root.
pub fn storage_entries(app: &TestApp) -> Vec<String> {
    std::fs::read_dir(&app.storage_root)
        .expect("read storage root")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect()
}
