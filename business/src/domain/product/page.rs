use super::model::Product;

/// Number of pages shown on each side of the current page.
pub const WINDOW_RADIUS: u32 = 2;

/// Pagination metadata reported by the server.
///
/// The server is authoritative: whatever page it reports replaces the page the
/// client asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total: u64,
    pub page: u32,
    pub last_page: u32,
}

impl PageInfo {
    /// Builds page info from raw server values.
    ///
    /// Pages are 1-based, so a `0` for `page` or `last_page` is read as `1`.
    pub fn new(total: u64, page: u32, last_page: u32) -> Self {
        Self {
            total,
            page: page.max(1),
            last_page: last_page.max(1),
        }
    }
}

/// One page of products together with its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult {
    pub items: Vec<Product>,
    pub info: PageInfo,
}

impl PaginatedResult {
    pub fn new(items: Vec<Product>, info: PageInfo) -> Self {
        Self { items, info }
    }
}

/// Page numbers to render as navigation controls.
///
/// Business rules:
/// - At most `WINDOW_RADIUS` pages before and after the current page
/// - Never below page 1, never above `total_pages`
/// - Asymmetric near the edges (page 1 of 10 gives `[1, 2, 3]`)
/// - Empty when `current_page` lies more than `WINDOW_RADIUS` past `total_pages`
pub fn visible_page_window(current_page: u32, total_pages: u32) -> Vec<u32> {
    let start = current_page.saturating_sub(WINDOW_RADIUS).max(1);
    let end = current_page.saturating_add(WINDOW_RADIUS).min(total_pages);
    (start..=end).collect()
}
