//! Blob store provider implementations.

#[cfg(feature = "local")]
pub mod local;
