//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use files_api::{AppState, build_app};
use files_auth::SessionAuthenticator;
use files_cache::CacheManager;
use files_core::config::{AppConfig, CacheConfig};
use files_core::types::UserId;
use files_database::MemoryFileStore;
use files_storage::LocalBlobStore;

/// Test application wired to in-process stores.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Metadata store behind the router
    pub files: Arc<MemoryFileStore>,
    /// Session issuer sharing the router's cache
    pub sessions: SessionAuthenticator,
    /// Blob root; removed on drop
    pub blob_dir: TempDir,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let blob_dir = tempfile::tempdir().expect("Failed to create blob dir");

        let mut config = AppConfig::default();
        config.storage.root_path = blob_dir.path().display().to_string();
        config.database.provider = "memory".into();
        config.cache = CacheConfig {
            provider: "memory".into(),
            ..Default::default()
        };

        let cache = Arc::new(
            CacheManager::new(&config.cache)
                .await
                .expect("Failed to init cache"),
        );
        let blobs = Arc::new(
            LocalBlobStore::new(blob_dir.path())
                .await
                .expect("Failed to init blob store"),
        );
        let files = Arc::new(MemoryFileStore::new());

        let state = AppState::new(config, files.clone(), blobs, Arc::clone(&cache));

        Self {
            router: build_app(state),
            files,
            sessions: SessionAuthenticator::new(cache),
            blob_dir,
        }
    }

    /// Open a session for a fresh user and return its token.
    pub async fn login(&self) -> String {
        self.login_as(UserId::new()).await
    }

    /// Open a session for `user_id` and return its token.
    pub async fn login_as(&self, user_id: UserId) -> String {
        self.sessions
            .open_session(user_id, Duration::from_secs(3600))
            .await
            .expect("Failed to open session")
    }

    /// Number of blobs written so far.
    pub fn blob_count(&self) -> usize {
        std::fs::read_dir(self.blob_dir.path())
            .expect("Failed to read blob dir")
            .count()
    }

    /// Make a JSON request.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body = body
            .map(|b| serde_json::to_vec(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, Body::from(body), token).await
    }

    /// Make a request with an arbitrary body.
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: Body,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("x-token", token);
        }

        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            bytes,
            body,
        }
    }

    /// Create a content record and return its JSON.
    pub async fn create_file(&self, token: &str, name: &str, content: &[u8]) -> Value {
        let response = self
            .request(
                "POST",
                "/files",
                Some(json!({"name": name, "type": "file", "data": encode(content)})),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }

    /// Create a folder, optionally inside `parent_id`, and return its JSON.
    pub async fn create_folder(&self, token: &str, name: &str, parent_id: Option<&str>) -> Value {
        let mut body = json!({"name": name, "type": "folder"});
        if let Some(parent_id) = parent_id {
            body["parentId"] = json!(parent_id);
        }
        let response = self.request("POST", "/files", Some(body), Some(token)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }
}

/// Standard base64.
pub fn encode(content: &[u8]) -> String {
    STANDARD.encode(content)
}

/// The `id` field of a record.
pub fn id_of(record: &Value) -> String {
    record["id"].as_str().expect("record has an id").to_string()
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub bytes: Bytes,
    /// Parsed JSON body, `Null` when not JSON
    pub body: Value,
}

impl TestResponse {
    /// The `error` message of an error body.
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
