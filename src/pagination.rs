use serde::{Deserialize, Serialize};

/// Page size used by the public catalog grid.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Page window applied to a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Requested page (1-based).
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

/// A page of items together with the paging state the templates render.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }
}
