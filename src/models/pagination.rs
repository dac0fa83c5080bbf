//! Page requests and paginated results

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Page shown when none (or garbage) is requested
pub const DEFAULT_PAGE: u32 = 1;

/// Query string accepted by the listing and search pages.
///
/// `page` stays raw text: a non-numeric value falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Free-text search (search page only)
    pub search: Option<String>,
    /// 1-based page number (default: 1)
    pub page: Option<String>,
}

/// A resolved page request, built per request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Rows per page
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Parse the raw `page` query value
    pub fn parse(raw: Option<&str>, limit: u32) -> Self {
        let page = raw
            .and_then(|p| p.trim().parse::<i64>().ok())
            .map(|p| p.clamp(1, u32::MAX as i64) as u32)
            .unwrap_or(DEFAULT_PAGE);
        Self::new(page, limit)
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

/// One page of results plus what the view needs to draw page links
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of matching rows
    pub total: i64,
    /// Current page (1-based)
    pub page: u32,
    /// Rows per page
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }

    /// Zero-based page indices, one per page link
    pub fn page_indices(&self) -> Vec<u32> {
        (0..self.total_pages()).collect()
    }
}

/// `ceil(count / limit)`; zero rows means zero pages
pub fn total_pages(count: i64, limit: u32) -> u32 {
    if count <= 0 {
        return 0;
    }
    let limit = limit.max(1) as i64;
    ((count + limit - 1) / limit) as u32
}
