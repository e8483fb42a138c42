//! The metadata store contract shared by every backend.

use async_trait::async_trait;

use files_core::result::AppResult;
use files_core::types::{FileId, PageRequest, ParentId, UserId};
use files_entity::file::{FileRecord, NewFileRecord};

/// Equality predicate over record fields, AND-combined. An empty filter
/// matches every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileFilter {
    /// Match on record id.
    pub id: Option<FileId>,
    /// Match on owner.
    pub owner_id: Option<UserId>,
    /// Match on parent; `Some(ParentId::Root)` matches top-level records only.
    pub parent_id: Option<ParentId>,
}

impl FileFilter {
    /// An empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a single record id.
    pub fn id(mut self, id: FileId) -> Self {
        self.id = Some(id);
        self
    }

    /// Restrict to records owned by `owner_id`.
    pub fn owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Restrict to direct children of `parent_id`.
    pub fn parent(mut self, parent_id: ParentId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Evaluate the predicate against a record.
    pub fn matches(&self, record: &FileRecord) -> bool {
        self.id.is_none_or(|id| record.id == id)
            && self.owner_id.is_none_or(|owner| record.owner_id == owner)
            && self.parent_id.is_none_or(|parent| record.parent_id == parent)
    }
}

/// Persistence for file and folder records.
///
/// Listing follows insertion order. Every write touches a single record.
#[async_trait]
pub trait FileStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider name (e.g., "postgres", "memory").
    fn provider_type(&self) -> &str;

    /// Persist a new record and return it with its generated id.
    async fn insert(&self, record: NewFileRecord) -> AppResult<FileRecord>;

    /// Return the first record matching `filter`, if any.
    async fn find_one(&self, filter: &FileFilter) -> AppResult<Option<FileRecord>>;

    /// Return one page of records matching `filter`, in insertion order.
    async fn list_page(&self, filter: &FileFilter, page: PageRequest) -> AppResult<Vec<FileRecord>>;

    /// Set the visibility flag of a record owned by `owner_id` and return the
    /// updated record, or `None` when no such record exists.
    async fn update_visibility(
        &self,
        id: FileId,
        owner_id: UserId,
        is_public: bool,
    ) -> AppResult<Option<FileRecord>>;

    /// Remove every record. Returns the number removed.
    async fn delete_all(&self) -> AppResult<u64>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
