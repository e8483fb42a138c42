//! # files-entity
//!
//! Domain entity models for Files Manager. A record is either a folder or a
//! content node carrying its blob locator; the split is expressed in the type
//! so a folder can never hold a `localPath`.

pub mod file;
