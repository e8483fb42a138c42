//! Application state shared across all handlers.

use std::sync::Arc;

use files_auth::SessionAuthenticator;
use files_cache::CacheManager;
use files_core::config::AppConfig;
use files_core::traits::BlobStore;
use files_database::FileStore;
use files_service::{DownloadService, FileService, UploadService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session token resolver
    pub authenticator: Arc<SessionAuthenticator>,
    /// Lookup, listing and visibility
    pub file_service: Arc<FileService>,
    /// Record creation
    pub upload_service: Arc<UploadService>,
    /// Content retrieval
    pub download_service: Arc<DownloadService>,
}

impl AppState {
    /// Wire services over already-opened stores.
    pub fn new(
        config: AppConfig,
        files: Arc<dyn FileStore>,
        blobs: Arc<dyn BlobStore>,
        cache: Arc<CacheManager>,
    ) -> Self {
        let upload_service = UploadService::new(
            Arc::clone(&files),
            Arc::clone(&blobs),
            config.storage.clone(),
        );
        let download_service = DownloadService::new(Arc::clone(&files), blobs);
        let file_service = FileService::new(files);

        Self {
            config: Arc::new(config),
            authenticator: Arc::new(SessionAuthenticator::new(cache)),
            file_service: Arc::new(file_service),
            upload_service: Arc::new(upload_service),
            download_service: Arc::new(download_service),
        }
    }
}
