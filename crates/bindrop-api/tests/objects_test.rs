//! Object store API integration tests.
//!
//! Run with: `cargo test -p bindrop-api --test objects_test`

mod helpers;

use helpers::{setup_test_app, setup_test_app_with_limit, storage_entries, upload_form, TEST_TOKEN};
use serde_json::Value;

const TOKEN_HEADER: &str = "X-Roblox-Token";

fn is_lowercase_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[tokio::test]
async fn upload_then_download_round_trips_payload_and_metadata() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .multipart(upload_form(b"hello", "a.txt", "text/plain"))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let id = body["id"].as_str().expect("id in upload response");
    assert_eq!(id.len(), 32);
    assert!(is_lowercase_hex(id));
    assert_eq!(
        body["downloadUrl"].as_str(),
        Some(format!("/download/{}", id).as_str())
    );

    let download = client
        .get(&format!("/download/{}", id))
        .add_header(TOKEN_HEADER, TEST_TOKEN)
        .await;
    assert_eq!(download.status_code(), 200);
    assert_eq!(download.as_bytes().as_ref(), b"hello".as_slice());
    assert_eq!(
        download.header("content-type").to_str().unwrap(),
        "text/plain"
    );

    let disposition = download.header("content-disposition");
    let disposition = disposition.to_str().unwrap();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("a.txt"));

    assert_eq!(
        download.header("x-served-for").to_str().unwrap(),
        "roblox-client"
    );
}

#[tokio::test]
async fn download_is_repeatable() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .multipart(upload_form(b"stable bytes", "data.bin", "application/octet-stream"))
        .await;
    let body: Value = response.json();
    let url = body["downloadUrl"].as_str().unwrap().to_string();

    for _ in 0..3 {
        let download = client.get(&url).add_header(TOKEN_HEADER, TEST_TOKEN).await;
        assert_eq!(download.status_code(), 200);
        assert_eq!(download.as_bytes().as_ref(), b"stable bytes".as_slice());
    }
}

#[tokio::test]
async fn download_without_token_is_forbidden() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .multipart(upload_form(b"secret", "s.bin", "application/octet-stream"))
        .await;
    let body: Value = response.json();
    let id = body["id"].as_str().unwrap();

    let download = client.get(&format!("/download/{}", id)).await;
    assert_eq!(download.status_code(), 403);
    assert_eq!(download.text(), "Forbidden");
}

#[tokio::test]
async fn wrong_token_is_indistinguishable_for_existing_and_missing_objects() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .multipart(upload_form(b"secret", "s.bin", "application/octet-stream"))
        .await;
    let body: Value = response.json();
    let existing_id = body["id"].as_str().unwrap().to_string();
    let missing_id = "00112233445566778899aabbccddeeff";

    let for_existing = client
        .get(&format!("/download/{}", existing_id))
        .add_header(TOKEN_HEADER, "not-the-token")
        .await;
    let for_missing = client
        .get(&format!("/download/{}", missing_id))
        .add_header(TOKEN_HEADER, "not-the-token")
        .await;

    assert_eq!(for_existing.status_code(), 403);
    assert_eq!(for_missing.status_code(), 403);
    assert_eq!(for_existing.text(), for_missing.text());
}

#[tokio::test]
async fn unknown_id_with_correct_token_is_not_found() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .get("/download/00112233445566778899aabbccddeeff")
        .add_header(TOKEN_HEADER, TEST_TOKEN)
        .await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.text(), "Not found");
}

#[tokio::test]
async fn malformed_id_with_correct_token_is_not_found() {
    let app = setup_test_app().await;
    let client = app.client();

    for bad_id in ["not-hex", "deadbeef", "00112233445566778899AABBCCDDEEFF"] {
        let response = client
            .get(&format!("/download/{}", bad_id))
            .add_header(TOKEN_HEADER, TEST_TOKEN)
            .await;
        assert_eq!(response.status_code(), 404, "id: {}", bad_id);
    }
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let form = axum_test::multipart::MultipartForm::new().add_text("note", "no file here");
    let response = client.post("/upload").multipart(form).await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn empty_file_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .multipart(upload_form(b"", "empty.bin", "application/octet-stream"))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn oversized_upload_is_rejected_and_persists_nothing() {
    let app = setup_test_app_with_limit(1024).await;
    let client = app.client();

    let oversized = vec![0u8; 2048];
    let response = client
        .post("/upload")
        .multipart(upload_form(&oversized, "big.bin", "application/octet-stream"))
        .await;
    assert_eq!(response.status_code(), 400);
    assert!(storage_entries(&app).is_empty());
}

#[tokio::test]
async fn upload_at_the_size_limit_is_accepted() {
    let app = setup_test_app_with_limit(1024).await;
    let client = app.client();

    let exact = vec![7u8; 1024];
    let response = client
        .post("/upload")
        .multipart(upload_form(&exact, "exact.bin", "application/octet-stream"))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let download = client
        .get(body["downloadUrl"].as_str().unwrap())
        .add_header(TOKEN_HEADER, TEST_TOKEN)
        .await;
    assert_eq!(download.as_bytes().as_ref(), exact.as_slice());
}

#[tokio::test]
async fn traversal_filename_is_served_as_base_name_and_stays_in_root() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .multipart(upload_form(b"gotcha", "../../etc/passwd", "text/plain"))
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let id = body["id"].as_str().unwrap();

    // Storage contains exactly the two id-keyed artifacts, nothing escaped the root.
    let mut entries = storage_entries(&app);
    entries.sort();
    assert_eq!(entries, vec![format!("{}.bin", id), format!("{}.json", id)]);

    let download = client
        .get(&format!("/download/{}", id))
        .add_header(TOKEN_HEADER, TEST_TOKEN)
        .await;
    assert_eq!(download.status_code(), 200);

    let disposition = download.header("content-disposition");
    let disposition = disposition.to_str().unwrap();
    assert!(disposition.contains("filename=\"passwd\""));
    assert!(!disposition.contains(".."));
}

#[tokio::test]
async fn repeated_uploads_produce_distinct_ids() {
    let app = setup_test_app().await;
    let client = app.client();

    let mut ids = std::collections::HashSet::new();
    for _ in 0..20 {
        let response = client
            .post("/upload")
            .multipart(upload_form(b"same content", "same.txt", "text/plain"))
            .await;
        assert_eq!(response.status_code(), 200);
        let body: Value = response.json();
        ids.insert(body["id"].as_str().unwrap().to_string());
    }
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn health_returns_ok() {
    let app = setup_test_app().await;
    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "ok");
}
