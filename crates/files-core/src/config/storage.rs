//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Local blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one blob per non-folder record.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Maximum accepted request body in bytes (the base64 payload included).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_root_path() -> String {
    "/tmp/files_manager".to_string()
}

fn default_max_upload() -> u64 {
    52_428_800 // 50 MB
}
