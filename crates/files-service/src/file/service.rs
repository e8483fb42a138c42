//! Owner-scoped record lookup, listing and visibility changes.

use std::sync::Arc;

use tracing::{debug, info};

use files_core::error::AppError;
use files_core::types::{FileId, PageRequest, ParentId};
use files_database::{FileFilter, FileStore};
use files_entity::file::FileRecord;

use crate::context::RequestContext;

/// Read and visibility operations on the caller's own records.
#[derive(Debug, Clone)]
pub struct FileService {
    files: Arc<dyn FileStore>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(files: Arc<dyn FileStore>) -> Self {
        Self { files }
    }

    /// Fetch one of the caller's records.
    ///
    /// Records owned by someone else are reported exactly like missing ones.
    pub async fn get(&self, ctx: &RequestContext, file_id: FileId) -> Result<FileRecord, AppError> {
        let filter = FileFilter::new().id(file_id).owner(ctx.user_id);
        self.files.find_one(&filter).await?.ok_or_else(|| {
            debug!(user_id = %ctx.user_id, file_id = %file_id, "Record not visible to caller");
            AppError::not_found("Not found")
        })
    }

    /// One page of the caller's records directly under `parent_id`.
    ///
    /// An absent or blank parent means the root. A parent that is not a valid
    /// reference matches nothing.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        parent_id: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<FileRecord>, AppError> {
        let parent = match parent_id.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => ParentId::Root,
            Some(raw) => match ParentId::parse(raw) {
                Some(parent) => parent,
                None => {
                    debug!(parent_id = raw, "Unparsable parent filter; empty listing");
                    return Ok(Vec::new());
                }
            },
        };

        let filter = FileFilter::new().owner(ctx.user_id).parent(parent);
        self.files.list_page(&filter, page).await
    }

    /// Make one of the caller's records public.
    pub async fn publish(&self, ctx: &RequestContext, file_id: FileId) -> Result<FileRecord, AppError> {
        self.get(ctx, file_id).await?;
        let record = self.set_visibility(ctx, file_id, true).await?;
        info!(user_id = %ctx.user_id, file_id = %file_id, "File published");
        Ok(record)
    }

    /// Make one of the caller's public records private again.
    pub async fn unpublish(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
    ) -> Result<FileRecord, AppError> {
        let current = self.get(ctx, file_id).await?;
        if !current.is_public {
            return Err(AppError::validation("File is not published yet"));
        }
        let record = self.set_visibility(ctx, file_id, false).await?;
        info!(user_id = %ctx.user_id, file_id = %file_id, "File unpublished");
        Ok(record)
    }

    /// Returns the record as it is after the update.
    async fn set_visibility(
        &self,
        ctx: &RequestContext,
        file_id: FileId,
        is_public: bool,
    ) -> Result<FileRecord, AppError> {
        self.files
            .update_visibility(file_id, ctx.user_id, is_public)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }
}
