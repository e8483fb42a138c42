//! Request DTOs.

use serde::Deserialize;

use files_service::CreateFileInput;

/// `parentId` as sent by clients: the number `0` or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ParentRef {
    /// Numeric form; only `0` is meaningful.
    Number(i64),
    /// `"0"` or a record id.
    Text(String),
}

impl ParentRef {
    fn into_raw(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

/// `POST /files` body. Every field is optional here so that missing
/// fields surface as the service's own validation messages.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    /// Display name.
    pub name: Option<String>,
    /// `folder`, `file` or `image`.
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    /// Containing folder; absent or `0` for the root.
    pub parent_id: Option<ParentRef>,
    /// Initial visibility, default `false`.
    pub is_public: Option<bool>,
    /// Base64 content.
    pub data: Option<String>,
}

impl From<CreateFileRequest> for CreateFileInput {
    fn from(req: CreateFileRequest) -> Self {
        Self {
            name: req.name,
            file_type: req.file_type,
            parent_id: req.parent_id.map(ParentRef::into_raw),
            is_public: req.is_public.unwrap_or(false),
            data: req.data,
        }
    }
}

/// `GET /files` query string. Values stay raw so the handler decides how
/// malformed ones behave.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesQuery {
    /// Parent folder filter; absent or `0` for the root.
    pub parent_id: Option<String>,
    /// Zero-based page number.
    pub page: Option<String>,
}
