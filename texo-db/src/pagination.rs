//! Page requests and page metadata

use serde::Serialize;

use crate::error::{Error, Result};

/// A validated page request: 1-based page number and a positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Create a page request, rejecting a page below 1 or a size below 1.
    pub fn new(page: i64, page_size: i64) -> Result<Self> {
        if page < 1 {
            return Err(Error::InvalidPagination(format!(
                "page must be at least 1, got {}",
                page
            )));
        }
        if page_size < 1 {
            return Err(Error::InvalidPagination(format!(
                "page size must be at least 1, got {}",
                page_size
            )));
        }
        Ok(Self { page, page_size })
    }

    /// The first page holding a single row, used for single-post lookup.
    pub fn single() -> Self {
        Self {
            page: 1,
            page_size: 1,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Rows to return.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// Number of pages needed for `total` rows, rounding up.
///
/// Zero rows give zero pages; a non-positive page size gives zero as well.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        return 0;
    }
    total / page_size + i64::from(total % page_size != 0)
}

/// Page links for a listing, serialized alongside the posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: i64,
    pub previous_page: i64,
    pub next_page: i64,
    pub last_page: i64,
    pub num_pages: i64,
    pub num_posts: i64,
}

impl PageInfo {
    pub fn new(request: PageRequest, total: i64) -> Self {
        let page = request.page();
        let num_pages = total_pages(total, request.page_size());

        Self {
            current_page: page,
            previous_page: (page - 1).max(1),
            next_page: page.saturating_add(1).min(num_pages),
            last_page: num_pages,
            num_pages,
            num_posts: total.max(0),
        }
    }
}
