//! Core type definitions used across the Files Manager workspace.

pub mod id;
pub mod pagination;
pub mod parent;

pub use id::{FileId, UserId};
pub use pagination::{PAGE_SIZE, PageRequest};
pub use parent::ParentId;
