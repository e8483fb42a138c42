//! Core traits defined in `files-core` and implemented by other crates.

pub mod blob;
pub mod cache;

pub use blob::BlobStore;
pub use cache::CacheProvider;
