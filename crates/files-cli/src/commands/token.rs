//! Session token commands.
//!
//! Tokens normally come from an external login service that writes
//! `auth_<token>` into the shared cache; these commands do the same for
//! operators and local testing.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Subcommand};
use serde::Serialize;

use files_auth::SessionAuthenticator;
use files_cache::CacheManager;
use files_core::config::AppConfig;
use files_core::error::AppError;
use files_core::types::UserId;

use crate::output::{self, OutputFormat};

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Open a session for a user and print its token
    Issue {
        /// User id the token resolves to
        #[arg(long)]
        user: String,
        /// Session lifetime in hours (defaults to `auth.session_ttl_hours`)
        #[arg(long)]
        ttl_hours: Option<u64>,
    },
    /// Revoke a token
    Revoke {
        /// Token to revoke
        token: String,
    },
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    token: String,
    user_id: String,
    ttl_hours: u64,
}

impl fmt::Display for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let cache = Arc::new(CacheManager::new(&config.cache).await?);
    let authenticator = SessionAuthenticator::new(cache);

    match &args.command {
        TokenCommand::Issue { user, ttl_hours } => {
            let user_id = UserId::parse(user)
                .ok_or_else(|| AppError::validation(format!("Invalid user id: {user}")))?;
            let ttl_hours = ttl_hours.unwrap_or(config.auth.session_ttl_hours);

            let token = authenticator
                .open_session(user_id, Duration::from_secs(ttl_hours.saturating_mul(3600)))
                .await?;

            output::print_item(
                &IssuedToken {
                    token,
                    user_id: user_id.to_string(),
                    ttl_hours,
                },
                format,
            );
        }
        TokenCommand::Revoke { token } => {
            authenticator.close_session(token).await?;
            output::print_success("Token revoked.");
        }
    }

    Ok(())
}
