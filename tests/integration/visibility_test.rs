//! Publish and unpublish over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use files_core::types::FileId;

use crate::helpers::{TestApp, id_of};

#[tokio::test]
async fn test_publish_then_unpublish() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let id = id_of(&app.create_file(&token, "a.txt", b"hi").await);

    let published = app
        .request("PUT", &format!("/files/{id}/publish"), None, Some(&token))
        .await;
    assert_eq!(published.status, StatusCode::OK);
    assert_eq!(published.body["isPublic"], true);

    let again = app
        .request("PUT", &format!("/files/{id}/publish"), None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body["isPublic"], true);

    let unpublished = app
        .request("PUT", &format!("/files/{id}/unpublish"), None, Some(&token))
        .await;
    assert_eq!(unpublished.status, StatusCode::OK);
    assert_eq!(unpublished.body["isPublic"], false);

    let current = app.request("GET", &format!("/files/{id}"), None, Some(&token)).await;
    assert_eq!(current.body["isPublic"], false);
}

#[tokio::test]
async fn test_unpublish_private_record_fails() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let id = id_of(&app.create_folder(&token, "sub", None).await);

    let response = app
        .request("PUT", &format!("/files/{id}/unpublish"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"error": "File is not published yet"}));
}

#[tokio::test]
async fn test_visibility_requires_ownership() {
    let app = TestApp::new().await;
    let owner = app.login().await;
    let other = app.login().await;
    let id = id_of(&app.create_file(&owner, "a.txt", b"hi").await);

    for action in ["publish", "unpublish"] {
        for target in [id.clone(), FileId::new().to_string(), "garbage".to_string()] {
            let response = app
                .request("PUT", &format!("/files/{target}/{action}"), None, Some(&other))
                .await;
            assert_eq!(response.status, StatusCode::NOT_FOUND, "{action} {target}");
        }
    }

    let current = app.request("GET", &format!("/files/{id}"), None, Some(&owner)).await;
    assert_eq!(current.body["isPublic"], false);
}
