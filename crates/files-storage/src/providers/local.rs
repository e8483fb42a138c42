//! Local filesystem blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use files_core::error::{AppError, ErrorKind};
use files_core::result::AppResult;
use files_core::traits::BlobStore;

/// Blob store writing one file per blob directly under a root directory.
///
/// Locators are the full paths of the written files.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a blob store rooted at `root_path`, creating the directory if
    /// it does not exist yet.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        debug!(root = %root.display(), "Blob store root ready");
        Ok(Self { root })
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn put(&self, data: Bytes) -> AppResult<String> {
        let path = self.root.join(Uuid::new_v4().to_string());
        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {}", path.display()),
                e,
            )
        })?;

        let locator = path.to_string_lossy().into_owned();
        debug!(locator = %locator, bytes = data.len(), "Wrote blob");
        Ok(locator)
    }

    async fn get(&self, locator: &str) -> AppResult<Bytes> {
        let data = fs::read(locator).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {locator}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read blob: {locator}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn exists(&self, locator: &str) -> AppResult<bool> {
        Ok(fs::try_exists(locator).await.unwrap_or(false))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }
}
