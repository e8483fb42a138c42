//! Delete every file record.

use clap::Args;

use files_core::config::AppConfig;
use files_core::error::AppError;
use files_database::{FileStore, open_file_store};

use crate::output;

/// Arguments for the clear command
#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub force: bool,
}

/// Execute the clear command. Stored content is left on disk.
pub async fn execute(args: &ClearArgs, config: &AppConfig) -> Result<(), AppError> {
    if !args.force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("This will DELETE every file record. Continue?")
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let store = open_file_store(&config.database).await?;
    let removed = store.delete_all().await?;

    output::print_success(&format!("Removed {removed} file record(s)."));
    Ok(())
}
