//! # files-api
//!
//! HTTP API layer for Files Manager built on Axum.
//!
//! Provides the `/files` endpoints, the `x-token` session extractor,
//! middleware (CORS, tracing, request logging), DTOs and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
