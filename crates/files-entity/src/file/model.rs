//! File record entity model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use files_core::types::{FileId, ParentId, UserId};

/// Kind of a record as named on the wire and in the `file_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// A container for other records. Has no content.
    Folder,
    /// A generic content file.
    File,
    /// An image content file.
    Image,
}

impl FileType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Image => "image",
        }
    }

    /// Whether this type is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "folder" => Ok(Self::Folder),
            "file" => Ok(Self::File),
            "image" => Ok(Self::Image),
            other => Err(format!("Unknown file type: {other}")),
        }
    }
}

/// The type-specific part of a record.
///
/// Content variants carry the blob locator; the folder variant carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    /// A folder.
    Folder,
    /// A generic file and the locator of its content.
    File {
        /// Blob store locator.
        #[serde(rename = "localPath")]
        local_path: String,
    },
    /// An image and the locator of its content.
    Image {
        /// Blob store locator.
        #[serde(rename = "localPath")]
        local_path: String,
    },
}

impl FileNode {
    /// Build a node from a type and an optional locator.
    ///
    /// Returns `None` when the pair breaks the folder/locator rule.
    pub fn from_parts(file_type: FileType, local_path: Option<String>) -> Option<Self> {
        match (file_type, local_path) {
            (FileType::Folder, None) => Some(Self::Folder),
            (FileType::File, Some(local_path)) => Some(Self::File { local_path }),
            (FileType::Image, Some(local_path)) => Some(Self::Image { local_path }),
            _ => None,
        }
    }

    /// The record type of this node.
    pub fn file_type(&self) -> FileType {
        match self {
            Self::Folder => FileType::Folder,
            Self::File { .. } => FileType::File,
            Self::Image { .. } => FileType::Image,
        }
    }

    /// The blob locator, absent for folders.
    pub fn local_path(&self) -> Option<&str> {
        match self {
            Self::Folder => None,
            Self::File { local_path } | Self::Image { local_path } => Some(local_path),
        }
    }
}

/// A stored file or folder record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Store-generated identifier.
    pub id: FileId,
    /// Owner of the record.
    #[serde(rename = "userId")]
    pub owner_id: UserId,
    /// Display name; never empty.
    pub name: String,
    /// Whether non-owners may read the content.
    pub is_public: bool,
    /// Containing folder or the root.
    pub parent_id: ParentId,
    /// Type and, for content records, the blob locator.
    #[serde(flatten)]
    pub node: FileNode,
}

impl FileRecord {
    /// The record type.
    pub fn file_type(&self) -> FileType {
        self.node.file_type()
    }

    /// Whether the record is a folder.
    pub fn is_folder(&self) -> bool {
        self.file_type().is_folder()
    }

    /// The blob locator, absent for folders.
    pub fn local_path(&self) -> Option<&str> {
        self.node.local_path()
    }

    /// Whether `user` may read this record's content.
    pub fn is_readable_by(&self, user: UserId) -> bool {
        self.is_public || self.owner_id == user
    }
}

/// Data required to create a new record. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileRecord {
    /// Owner of the record.
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// Initial visibility.
    pub is_public: bool,
    /// Containing folder or the root.
    pub parent_id: ParentId,
    /// Type and locator.
    pub node: FileNode,
}

impl NewFileRecord {
    /// Attach the store-generated id.
    pub fn into_record(self, id: FileId) -> FileRecord {
        FileRecord {
            id,
            owner_id: self.owner_id,
            name: self.name,
            is_public: self.is_public,
            parent_id: self.parent_id,
            node: self.node,
        }
    }
}
