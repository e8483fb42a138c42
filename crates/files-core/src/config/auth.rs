//! Session token configuration.

use serde::{Deserialize, Serialize};

/// Session token settings.
///
/// Tokens are normally issued by an external login service; the TTL here
/// applies to tokens opened through the operator CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Lifetime of an opened session in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_hours: default_session_ttl(),
        }
    }
}

fn default_session_ttl() -> u64 {
    24
}
