//! Custom Axum extractors.

pub mod auth;
pub mod pagination;
pub mod path;

pub use auth::AuthUser;
pub use pagination::parse_page;
pub use path::parse_file_id;
