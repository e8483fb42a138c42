//! Blob store trait for raw content of non-folder records.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Persists opaque byte blobs and hands back a locator for each.
///
/// The locator is stored on the record as its `localPath` and is the only
/// way to read the blob back.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Write a new blob and return its locator.
    async fn put(&self, data: Bytes) -> AppResult<String>;

    /// Read the blob at `locator`. A missing blob is a `NotFound` error.
    async fn get(&self, locator: &str) -> AppResult<Bytes>;

    /// Check whether a blob exists at `locator`.
    async fn exists(&self, locator: &str) -> AppResult<bool>;

    /// Check whether the store is usable.
    async fn health_check(&self) -> AppResult<bool>;
}
