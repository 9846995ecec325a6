//! Pagination types for list endpoints and exports.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 25;
/// Maximum page size for interactive endpoints.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request, clamped to the interactive page-size cap.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// A single uncapped page used by export callers to materialize the full
    /// filtered set. `limit` comes from `report.max_export_rows`.
    pub fn export_window(limit: u64) -> Self {
        Self {
            page: 1,
            page_size: limit.max(1),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    ///
    /// `page` arrives from callers unclamped, so the multiply saturates
    /// instead of wrapping.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)).saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page, in query order.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of records across all pages.
    pub total_records: u64,
    /// Total number of pages: `ceil(total_records / page_size)`.
    pub total_pages: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: &PageRequest, total_records: u64) -> Self {
        Self {
            items,
            page: page.page,
            page_size: page.page_size,
            total_records,
            total_pages: total_records.div_ceil(page.page_size.max(1)),
        }
    }

    /// Map the items to another representation, keeping the page envelope.
    pub fn map<U: Serialize>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_records: self.total_records,
            total_pages: self.total_pages,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(PageRequest::new(1, 25).offset(), 0);
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
    }

    #[test]
    fn test_page_size_clamped() {
        assert_eq!(PageRequest::new(1, 0).page_size, 1);
        assert_eq!(PageRequest::new(1, 500).page_size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, 25).page, 1);
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        let page = PageRequest {
            page: u64::MAX,
            page_size: 100,
        };
        assert_eq!(page.offset(), u64::MAX);
    }

    #[test]
    fn test_export_window_is_uncapped() {
        let page = PageRequest::export_window(10_000);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit(), 10_000);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for (total, limit, expected) in [
            (0u64, 10u64, 0u64),
            (1, 10, 1),
            (10, 10, 1),
            (11, 10, 2),
            (99, 25, 4),
            (100, 25, 4),
            (101, 25, 5),
        ] {
            let page = PageRequest::new(1, limit);
            let resp = PageResponse::<u64>::new(Vec::new(), &page, total);
            assert_eq!(resp.total_pages, expected, "total={total} limit={limit}");
        }
    }
}
