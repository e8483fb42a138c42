//! Flat database row for the `files` table.

use sqlx::FromRow;

use files_core::error::ErrorKind;
use files_core::types::{FileId, ParentId, UserId};
use files_core::AppError;

use super::model::{FileNode, FileRecord, FileType};

/// A `files` row as stored. Converted into a [`FileRecord`] with
/// `TryFrom`, which rejects rows that break the folder/locator rule.
#[derive(Debug, Clone, FromRow)]
pub struct FileRow {
    /// Record id.
    pub id: FileId,
    /// Owner id.
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// `folder`, `file` or `image`.
    pub file_type: String,
    /// Visibility flag.
    pub is_public: bool,
    /// Parent folder; `NULL` means root.
    pub parent_id: Option<FileId>,
    /// Blob locator; `NULL` for folders.
    pub local_path: Option<String>,
}

impl TryFrom<FileRow> for FileRecord {
    type Error = AppError;

    fn try_from(row: FileRow) -> Result<Self, Self::Error> {
        let file_type: FileType = row
            .file_type
            .parse()
            .map_err(|e: String| AppError::new(ErrorKind::Database, e))?;
        let node = FileNode::from_parts(file_type, row.local_path).ok_or_else(|| {
            AppError::new(
                ErrorKind::Database,
                format!("Row {} has an inconsistent local path for type {file_type}", row.id),
            )
        })?;

        Ok(FileRecord {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            is_public: row.is_public,
            parent_id: ParentId::from(row.parent_id),
            node,
        })
    }
}
