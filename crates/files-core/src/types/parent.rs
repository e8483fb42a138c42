//! The parent reference of a record: the root sentinel or a folder id.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::id::FileId;

/// Wire form of the root sentinel.
pub const ROOT_SENTINEL: &str = "0";

/// Where a record lives in the hierarchy.
///
/// `Root` is never an actual record id. On the wire it is the number `0`;
/// in the metadata store it is `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParentId {
    /// Top level, no parent.
    #[default]
    Root,
    /// Inside the folder with this id.
    Folder(FileId),
}

impl ParentId {
    /// Parse a parent reference. `"0"` is the root; anything else must be a
    /// well-formed record id.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == ROOT_SENTINEL {
            return Some(Self::Root);
        }
        FileId::parse(raw).map(Self::Folder)
    }

    /// Whether this is the root sentinel.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// The referenced folder id, if any.
    pub fn folder_id(&self) -> Option<FileId> {
        match self {
            Self::Root => None,
            Self::Folder(id) => Some(*id),
        }
    }
}

impl From<Option<FileId>> for ParentId {
    fn from(value: Option<FileId>) -> Self {
        value.map_or(Self::Root, Self::Folder)
    }
}

impl fmt::Display for ParentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str(ROOT_SENTINEL),
            Self::Folder(id) => write!(f, "{id}"),
        }
    }
}

impl Serialize for ParentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Root => serializer.serialize_u8(0),
            Self::Folder(id) => id.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ParentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParentVisitor;

        impl Visitor<'_> for ParentVisitor {
            type Value = ParentId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("0 or a record id")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ParentId, E> {
                if v == 0 {
                    Ok(ParentId::Root)
                } else {
                    Err(E::invalid_value(de::Unexpected::Unsigned(v), &self))
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ParentId, E> {
                if v == 0 {
                    Ok(ParentId::Root)
                } else {
                    Err(E::invalid_value(de::Unexpected::Signed(v), &self))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ParentId, E> {
                ParentId::parse(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(ParentVisitor)
    }
}
