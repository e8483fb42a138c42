//! # files-service
//!
//! Business logic for Files Manager. Each service orchestrates the metadata
//! store and the blob store to implement one group of use cases.
//!
//! Services follow constructor injection: every dependency is provided at
//! construction time via `Arc` handles.

pub mod context;
pub mod file;

pub use context::RequestContext;
pub use file::{ContentResult, CreateFileInput, DownloadService, FileService, UploadService};
