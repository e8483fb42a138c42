//! Token handling on every endpoint.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, id_of};

const ENDPOINTS: [(&str, &str); 6] = [
    ("POST", "/files"),
    ("GET", "/files"),
    ("GET", "/files/{id}"),
    ("PUT", "/files/{id}/publish"),
    ("PUT", "/files/{id}/unpublish"),
    ("GET", "/files/{id}/data"),
];

#[tokio::test]
async fn test_every_endpoint_requires_token() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let record = app.create_file(&token, "a.txt", b"hi").await;
    let id = id_of(&record);

    for (method, template) in ENDPOINTS {
        let path = template.replace("{id}", &id);
        let response = app
            .request(method, &path, Some(json!({"name": "x", "type": "folder"})), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(response.error(), "Unauthorized");
    }
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/files", None, Some("not-a-session")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({"error": "Unauthorized"}));
}

#[tokio::test]
async fn test_revoked_token_is_unauthorized() {
    let app = TestApp::new().await;
    let token = app.login().await;
    assert_eq!(app.request("GET", "/files", None, Some(&token)).await.status, StatusCode::OK);

    app.sessions.close_session(&token).await.unwrap();

    let response = app.request("GET", "/files", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_is_checked_before_validation() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/files", Some(json!({})), Some("")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.files.len().await, 0);
}
