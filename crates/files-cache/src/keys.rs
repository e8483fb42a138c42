//! Cache key builders.
//!
//! Session tokens share the cache with the account service that issues
//! them, so the key layout is fixed.

/// Prefix of session token keys.
const AUTH_PREFIX: &str = "auth_";

/// Cache key holding the owner id for a session token.
pub fn auth_token(token: &str) -> String {
    format!("{AUTH_PREFIX}{token}")
}
