//! In-process metadata store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use files_core::result::AppResult;
use files_core::types::{FileId, PageRequest, UserId};
use files_entity::file::{FileRecord, NewFileRecord};

use crate::store::{FileFilter, FileStore};

/// A [`FileStore`] holding records in an insertion-ordered vector.
///
/// Contents are lost on restart. Used by tests and single-process
/// deployments configured with `database.provider = "memory"`.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    records: RwLock<Vec<FileRecord>>,
}

impl MemoryFileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn insert(&self, record: NewFileRecord) -> AppResult<FileRecord> {
        let record = record.into_record(FileId::new());
        self.records.write().await.push(record.clone());
        debug!(file_id = %record.id, "Inserted record into memory store");
        Ok(record)
    }

    async fn find_one(&self, filter: &FileFilter) -> AppResult<Option<FileRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| filter.matches(r)).cloned())
    }

    async fn list_page(&self, filter: &FileFilter, page: PageRequest) -> AppResult<Vec<FileRecord>> {
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| filter.matches(r))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn update_visibility(
        &self,
        id: FileId,
        owner_id: UserId,
        is_public: bool,
    ) -> AppResult<Option<FileRecord>> {
        let mut records = self.records.write().await;
        Ok(records
            .iter_mut()
            .find(|r| r.id == id && r.owner_id == owner_id)
            .map(|r| {
                r.is_public = is_public;
                r.clone()
            }))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let mut records = self.records.write().await;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
