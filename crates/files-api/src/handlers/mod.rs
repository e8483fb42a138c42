//! HTTP request handlers.

pub mod file;
