//! File and folder creation.

use std::sync::Arc;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use bytes::Bytes;
use tracing::{debug, info, warn};

use files_core::config::StorageConfig;
use files_core::error::AppError;
use files_core::traits::BlobStore;
use files_core::types::ParentId;
use files_database::{FileFilter, FileStore};
use files_entity::file::{FileNode, FileRecord, FileType, NewFileRecord};

use crate::context::RequestContext;

/// Standard alphabet, padding optional.
const PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Raw create parameters as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct CreateFileInput {
    /// Display name.
    pub name: Option<String>,
    /// `folder`, `file` or `image`.
    pub file_type: Option<String>,
    /// `"0"` for the root, otherwise a folder id. Absent means root.
    pub parent_id: Option<String>,
    /// Initial visibility.
    pub is_public: bool,
    /// Base64 content; required unless creating a folder.
    pub data: Option<String>,
}

/// Creates records and writes their content to the blob store.
#[derive(Debug, Clone)]
pub struct UploadService {
    files: Arc<dyn FileStore>,
    blobs: Arc<dyn BlobStore>,
    config: StorageConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(files: Arc<dyn FileStore>, blobs: Arc<dyn BlobStore>, config: StorageConfig) -> Self {
        Self {
            files,
            blobs,
            config,
        }
    }

    /// Validate `input` and create the record it describes.
    ///
    /// Checks run in a fixed order and the first failure wins: name, type,
    /// data, then parent. Folders never touch the blob store.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateFileInput,
    ) -> Result<FileRecord, AppError> {
        let name = input
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::validation("Missing name"))?;

        let file_type: FileType = input
            .file_type
            .as_deref()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| AppError::validation("Missing type"))?;

        let data = match file_type {
            FileType::Folder => None,
            _ => Some(
                input
                    .data
                    .filter(|d| !d.is_empty())
                    .ok_or_else(|| AppError::validation("Missing data"))?,
            ),
        };

        let parent_id = self.resolve_parent(input.parent_id.as_deref()).await?;

        let node = match data {
            None => FileNode::Folder,
            Some(encoded) => {
                let bytes = self.decode(&encoded)?;
                let local_path = self.blobs.put(bytes).await?;
                match file_type {
                    FileType::Image => FileNode::Image { local_path },
                    _ => FileNode::File { local_path },
                }
            }
        };

        let new_record = NewFileRecord {
            owner_id: ctx.user_id,
            name,
            is_public: input.is_public,
            parent_id,
            node,
        };

        let locator = new_record.node.local_path().map(str::to_owned);
        let record = self.files.insert(new_record).await.inspect_err(|e| {
            if let Some(locator) = &locator {
                warn!(locator = %locator, error = %e, "Record insert failed; blob left orphaned");
            }
        })?;

        info!(
            user_id = %ctx.user_id,
            file_id = %record.id,
            file_type = %record.file_type(),
            parent_id = %record.parent_id,
            "File created"
        );

        Ok(record)
    }

    /// The root is always valid; any other reference must name an existing
    /// folder.
    async fn resolve_parent(&self, raw: Option<&str>) -> Result<ParentId, AppError> {
        let Some(raw) = raw else {
            return Ok(ParentId::Root);
        };

        let parent_id = ParentId::parse(raw).ok_or_else(|| {
            debug!(parent_id = raw, "Malformed parent id");
            AppError::validation("Parent not found")
        })?;

        let ParentId::Folder(folder_id) = parent_id else {
            return Ok(ParentId::Root);
        };

        let parent = self
            .files
            .find_one(&FileFilter::new().id(folder_id))
            .await?
            .ok_or_else(|| AppError::validation("Parent not found"))?;

        if !parent.is_folder() {
            return Err(AppError::validation("Parent is not a folder"));
        }

        Ok(parent_id)
    }

    fn decode(&self, encoded: &str) -> Result<Bytes, AppError> {
        let bytes = PAYLOAD
            .decode(encoded.trim())
            .map_err(|_| AppError::validation("Invalid data"))?;

        if bytes.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }

        Ok(Bytes::from(bytes))
    }
}
