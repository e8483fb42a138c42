//! Response DTOs.
//!
//! File records are returned as [`files_entity::file::FileRecord`], whose
//! serde form is the wire form.

use serde::{Deserialize, Serialize};

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// What went wrong.
    pub error: String,
}

impl ErrorBody {
    /// Creates an error body.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
