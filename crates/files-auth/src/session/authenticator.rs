//! Maps opaque session tokens to owner ids through the cache.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use uuid::Uuid;

use files_cache::CacheManager;
use files_cache::keys;
use files_core::error::AppError;
use files_core::result::AppResult;
use files_core::traits::CacheProvider;
use files_core::types::UserId;

/// Resolves bearer tokens to the user they were issued for.
#[derive(Debug, Clone)]
pub struct SessionAuthenticator {
    cache: Arc<CacheManager>,
}

impl SessionAuthenticator {
    /// Create a new authenticator over the session cache.
    pub fn new(cache: Arc<CacheManager>) -> Self {
        Self { cache }
    }

    /// Resolve `token` to its owner.
    ///
    /// An empty, unknown or expired token, or a stored value that is not a
    /// user id, is `Unauthorized`. Never creates a session.
    pub async fn resolve(&self, token: &str) -> AppResult<UserId> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::unauthorized("Unauthorized"));
        }

        let Some(stored) = self.cache.get(&keys::auth_token(token)).await? else {
            debug!("Session token not found");
            return Err(AppError::unauthorized("Unauthorized"));
        };

        UserId::parse(&stored).ok_or_else(|| {
            debug!("Session token maps to a malformed user id");
            AppError::unauthorized("Unauthorized")
        })
    }

    /// Issue a fresh token for `user_id`, valid for `ttl`.
    pub async fn open_session(&self, user_id: UserId, ttl: Duration) -> AppResult<String> {
        let token = Uuid::new_v4().to_string();
        self.cache
            .set(&keys::auth_token(&token), &user_id.to_string(), ttl)
            .await?;
        info!(user_id = %user_id, ttl_seconds = ttl.as_secs(), "Session opened");
        Ok(token)
    }

    /// Revoke `token`. Revoking an unknown token is not an error.
    pub async fn close_session(&self, token: &str) -> AppResult<()> {
        self.cache.delete(&keys::auth_token(token.trim())).await?;
        info!("Session closed");
        Ok(())
    }
}
