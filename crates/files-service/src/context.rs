//! Request context carrying the authenticated caller.

use files_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built once the session token has been resolved and passed into every
/// service method so each operation knows who is acting.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
}

impl RequestContext {
    /// Creates a new request context for `user_id`.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
