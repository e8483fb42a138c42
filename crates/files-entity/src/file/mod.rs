//! File and folder record entities.

pub mod model;
pub mod row;

pub use model::{FileNode, FileRecord, FileType, NewFileRecord};
pub use row::FileRow;
