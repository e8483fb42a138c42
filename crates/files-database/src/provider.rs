//! Metadata store selection by configuration.

use std::sync::Arc;

use tracing::info;

use files_core::config::DatabaseConfig;
use files_core::error::AppError;
use files_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryFileStore;
use crate::migration::run_migrations;
use crate::repositories::FileRepository;
use crate::store::FileStore;

/// Open the metadata store named by `config.provider`.
///
/// The PostgreSQL store is migrated before it is handed out.
pub async fn open_file_store(config: &DatabaseConfig) -> AppResult<Arc<dyn FileStore>> {
    match config.provider.as_str() {
        "postgres" => {
            let pool = DatabasePool::connect(config).await?;
            run_migrations(pool.pool()).await?;
            Ok(Arc::new(FileRepository::new(pool.pool().clone())))
        }
        "memory" => {
            info!("Using in-memory metadata store; records will not survive a restart");
            Ok(Arc::new(MemoryFileStore::new()))
        }
        other => Err(AppError::configuration(format!(
            "Unknown database provider: '{other}'. Supported: postgres, memory"
        ))),
    }
}
