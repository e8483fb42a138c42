//! Content retrieval and visibility over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use files_core::types::FileId;

use crate::helpers::{TestApp, id_of};

#[tokio::test]
async fn test_private_content_hidden_like_missing() {
    let app = TestApp::new().await;
    let owner = app.login().await;
    let other = app.login().await;
    let id = id_of(&app.create_file(&owner, "secret.txt", b"s3cr3t").await);

    let hidden = app
        .request("GET", &format!("/files/{id}/data"), None, Some(&other))
        .await;
    let missing = app
        .request("GET", &format!("/files/{}/data", FileId::new()), None, Some(&other))
        .await;

    assert_eq!(hidden.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(hidden.bytes, missing.bytes);
}

#[tokio::test]
async fn test_published_content_readable_by_anyone_with_a_session() {
    let app = TestApp::new().await;
    let owner = app.login().await;
    let other = app.login().await;
    let id = id_of(&app.create_file(&owner, "notes.md", b"# hi").await);

    app.request("PUT", &format!("/files/{id}/publish"), None, Some(&owner))
        .await;

    let response = app
        .request("GET", &format!("/files/{id}/data"), None, Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.bytes[..], b"# hi");

    // Content visibility does not widen metadata lookups.
    let meta = app.request("GET", &format!("/files/{id}"), None, Some(&other)).await;
    assert_eq!(meta.status, StatusCode::NOT_FOUND);

    app.request("PUT", &format!("/files/{id}/unpublish"), None, Some(&owner))
        .await;
    let response = app
        .request("GET", &format!("/files/{id}/data"), None, Some(&other))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_folder_has_no_content() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let id = id_of(&app.create_folder(&token, "sub", None).await);

    let response = app
        .request("GET", &format!("/files/{id}/data"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"error": "A folder doesn't have content"}));
}

#[tokio::test]
async fn test_missing_blob_is_not_found() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let record = app.create_file(&token, "a.txt", b"hi").await;
    std::fs::remove_file(record["localPath"].as_str().unwrap()).unwrap();

    let response = app
        .request("GET", &format!("/files/{}/data", id_of(&record)), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "Not found");
}

#[tokio::test]
async fn test_unknown_extension_served_as_binary() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let id = id_of(&app.create_file(&token, "blob.zzzunknown", b"\x00\x01").await);

    let response = app
        .request("GET", &format!("/files/{id}/data"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["content-type"], "application/octet-stream");
}
