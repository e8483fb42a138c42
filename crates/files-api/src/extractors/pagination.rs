//! Page query parameter parsing.

use files_core::error::AppError;
use files_core::types::PageRequest;

/// Parse the zero-based `page` parameter; absent means the first page.
pub fn parse_page(raw: Option<&str>) -> Result<PageRequest, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(PageRequest::default()),
        Some(value) => value
            .parse::<u64>()
            .map(PageRequest::new)
            .map_err(|_| AppError::validation("Invalid page")),
    }
}
