//! # files-storage
//!
//! Content blob storage for Files Manager. Each non-folder record owns one
//! blob, addressed by an opaque locator unrelated to the record id.

pub mod providers;

#[cfg(feature = "local")]
pub use providers::local::LocalBlobStore;
