//! File record repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use files_core::error::{AppError, ErrorKind};
use files_core::result::AppResult;
use files_core::types::{FileId, PageRequest, ParentId, UserId};
use files_entity::file::{FileRecord, FileRow, NewFileRecord};

use crate::store::{FileFilter, FileStore};

const COLUMNS: &str = "id, owner_id, name, file_type, is_public, parent_id, local_path";

/// Repository for the `files` table.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the `WHERE` clause for `filter`. The root parent is stored as `NULL`.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &FileFilter) {
    let mut sep = " WHERE ";
    if let Some(id) = filter.id {
        qb.push(sep).push("id = ").push_bind(id);
        sep = " AND ";
    }
    if let Some(owner_id) = filter.owner_id {
        qb.push(sep).push("owner_id = ").push_bind(owner_id);
        sep = " AND ";
    }
    match filter.parent_id {
        Some(ParentId::Root) => {
            qb.push(sep).push("parent_id IS NULL");
        }
        Some(ParentId::Folder(parent)) => {
            qb.push(sep).push("parent_id = ").push_bind(parent);
        }
        None => {}
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl FileStore for FileRepository {
    fn provider_type(&self) -> &str {
        "postgres"
    }

    async fn insert(&self, record: NewFileRecord) -> AppResult<FileRecord> {
        let row = sqlx::query_as::<_, FileRow>(&format!(
            "INSERT INTO files (owner_id, name, file_type, is_public, parent_id, local_path) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(record.owner_id)
        .bind(&record.name)
        .bind(record.node.file_type().as_str())
        .bind(record.is_public)
        .bind(record.parent_id.folder_id())
        .bind(record.node.local_path())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert file", e))?;

        FileRecord::try_from(row)
    }

    async fn find_one(&self, filter: &FileFilter) -> AppResult<Option<FileRecord>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM files"));
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY seq LIMIT 1");

        qb.build_query_as::<FileRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))?
            .map(FileRecord::try_from)
            .transpose()
    }

    async fn list_page(&self, filter: &FileFilter, page: PageRequest) -> AppResult<Vec<FileRecord>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM files"));
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY seq LIMIT ")
            .push_bind(to_i64(page.limit()))
            .push(" OFFSET ")
            .push_bind(to_i64(page.offset()));

        qb.build_query_as::<FileRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))?
            .into_iter()
            .map(FileRecord::try_from)
            .collect()
    }

    async fn update_visibility(
        &self,
        id: FileId,
        owner_id: UserId,
        is_public: bool,
    ) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRow>(&format!(
            "UPDATE files SET is_public = $1 WHERE id = $2 AND owner_id = $3 RETURNING {COLUMNS}"
        ))
        .bind(is_public)
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update file visibility", e)
        })?
        .map(FileRecord::try_from)
        .transpose()
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM files")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear files", e))?;
        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
