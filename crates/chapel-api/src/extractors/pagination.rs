//! Pagination query parameters.

use serde::{Deserialize, Serialize};

use chapel_core::types::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default: 20, max: 100).
    pub per_page: Option<u64>,
}

impl PaginationParams {
    /// Converts to a clamped `PageRequest`.
    pub fn page_request(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.per_page.unwrap_or(defaults.per_page),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamping() {
        assert_eq!(PaginationParams::default().page_request(), PageRequest::default());

        let params = PaginationParams {
            page: Some(0),
            per_page: Some(1_000),
        };
        let req = params.page_request();
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 100);
    }
}
