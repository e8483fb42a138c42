//! Content retrieval with visibility enforcement.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use files_core::error::AppError;
use files_core::traits::BlobStore;
use files_core::types::FileId;
use files_database::{FileFilter, FileStore};
use files_entity::file::FileRecord;

use crate::context::RequestContext;

/// Raw content of a record and the media type to serve it with.
#[derive(Debug, Clone)]
pub struct ContentResult {
    /// Content bytes.
    pub data: Bytes,
    /// Value for the `Content-Type` header.
    pub content_type: String,
}

/// Serves record content to owners, and to anyone once published.
#[derive(Debug, Clone)]
pub struct DownloadService {
    files: Arc<dyn FileStore>,
    blobs: Arc<dyn BlobStore>,
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(files: Arc<dyn FileStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { files, blobs }
    }

    /// Read the content of a record.
    ///
    /// A private record owned by someone else is `NotFound`, the same as a
    /// missing one. Folders have no content.
    pub async fn get_content(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
    ) -> Result<ContentResult, AppError> {
        let record = self
            .files
            .find_one(&FileFilter::new().id(file_id))
            .await?
            .filter(|r| r.is_readable_by(ctx.user_id))
            .ok_or_else(|| {
                debug!(user_id = %ctx.user_id, file_id = %file_id, "Content not visible to caller");
                AppError::not_found("Not found")
            })?;

        let Some(locator) = record.local_path() else {
            return Err(AppError::validation("A folder doesn't have content"));
        };

        let data = self.blobs.get(locator).await?;
        Ok(ContentResult {
            content_type: content_type_for(&record),
            data,
        })
    }
}

/// Media type guessed from the record name's extension.
fn content_type_for(record: &FileRecord) -> String {
    mime_guess::from_path(&record.name)
        .first_or_octet_stream()
        .to_string()
}
