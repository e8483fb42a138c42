//! Convenience result type alias for Files Manager.

use crate::error::AppError;

/// A specialized `Result` type for Files Manager operations.
pub type AppResult<T> = Result<T, AppError>;
