//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Fixed number of records per page.
pub const PAGE_SIZE: u64 = 20;

/// A zero-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-based).
    #[serde(default)]
    pub page: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64) -> Self {
        Self { page }
    }

    /// Number of records to skip.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(PAGE_SIZE)
    }

    /// Maximum number of records on the page.
    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}
