//! Typed path parameter helpers.

use files_core::error::AppError;
use files_core::types::FileId;

/// Parses a record id from a path segment. A malformed id can never name a
/// record, so it is reported as not found.
pub fn parse_file_id(s: &str) -> Result<FileId, AppError> {
    FileId::parse(s).ok_or_else(|| AppError::not_found(format!("Invalid file id: {s}")))
}
