//! HTTP-level integration tests driving the full router in-process.

mod auth_test;
mod content_test;
mod file_test;
mod helpers;
mod visibility_test;
