//! Database migration command.

use files_core::config::AppConfig;
use files_core::error::AppError;
use files_database::DatabasePool;

use crate::output;

/// Apply pending migrations to the configured PostgreSQL database.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if config.database.provider != "postgres" {
        output::print_warning(&format!(
            "Database provider is '{}'; nothing to migrate.",
            config.database.provider
        ));
        return Ok(());
    }

    println!("Running database migrations...");
    let pool = DatabasePool::connect(&config.database).await?;
    let result = files_database::migration::run_migrations(pool.pool()).await;
    pool.close().await;
    result?;

    output::print_success("All migrations applied successfully.");
    Ok(())
}
