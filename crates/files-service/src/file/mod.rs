//! File services: create, lookup and listing, visibility, and content.

pub mod download;
pub mod service;
pub mod upload;

pub use download::{ContentResult, DownloadService};
pub use service::FileService;
pub use upload::{CreateFileInput, UploadService};
