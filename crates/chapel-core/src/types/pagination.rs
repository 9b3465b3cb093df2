//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PER_PAGE: u64 = 20;
/// Maximum page size.
const MAX_PER_PAGE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl PageRequest {
    /// Create a new page request, clamping both values into range.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Re-clamp values that arrived through deserialization.
    pub fn normalized(self) -> Self {
        Self::new(self.page, self.per_page)
    }

    /// Number of items before this page. Saturates for absurd page numbers.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Return the page size.
    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// `OFFSET` as a PostgreSQL `BIGINT`, capped at `i64::MAX`.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset()).unwrap_or(i64::MAX)
    }

    /// `LIMIT` as a PostgreSQL `BIGINT`.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit()).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(request.per_page)
        };
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total_items,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        }
    }

    /// Transform every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_clamp() {
        let req = PageRequest::new(0, 500);
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 100);
        assert_eq!(req.offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_huge_page_saturates() {
        let req = PageRequest::new(u64::MAX, 100);
        assert_eq!(req.offset(), u64::MAX);
        assert_eq!(req.sql_offset(), i64::MAX);
        assert_eq!(req.sql_limit(), 100);

        let past_bigint = PageRequest::new(u64::MAX / 100, 100);
        assert!(past_bigint.offset() > i64::MAX as u64);
        assert_eq!(past_bigint.sql_offset(), i64::MAX);
        assert_eq!(PageRequest::new(3, 10).sql_offset(), 20);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = PageResponse::new(Vec::<u8>::new(), PageRequest::new(u64::MAX, 100), 3);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_page_response_metadata() {
        let page = PageResponse::new(vec![1, 2], PageRequest::new(2, 2), 5);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(page.has_previous);

        let empty: PageResponse<u8> = PageResponse::new(Vec::new(), PageRequest::default(), 0);
        assert_eq!(empty.total_pages, 1);
        assert!(!empty.has_next);
    }
}
