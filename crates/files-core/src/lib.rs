//! # files-core
//!
//! Core crate for Files Manager. Contains collaborator traits, configuration
//! schemas, typed identifiers, the root-parent sentinel, pagination, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Files Manager crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
