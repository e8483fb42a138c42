//! CLI command definitions and dispatch.

pub mod clear;
pub mod migrate;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use files_core::config::AppConfig;
use files_core::error::AppError;

/// Files Manager: per-user file storage backend
#[derive(Debug, Parser)]
#[command(name = "files-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects `config/{env}.toml`)
    #[arg(short, long, env = "FILES_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Session token management
    Token(token::TokenArgs),
    /// Delete every file record
    Clear(clear::ClearArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(&self.env)?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::Token(args) => token::execute(args, &config, self.format).await,
            Commands::Clear(args) => clear::execute(args, &config).await,
        }
    }
}

/// Helper: load configuration for an environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}
