use serde::Serialize;

use crate::list_query::PageSlice;

/// Maximum number of page buttons shown by the pagination control.
pub const MAX_VISIBLE_PAGES: usize = 5;

fn get_pages(total_pages: usize, current_page: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return vec![];
    }

    let current_page = current_page.clamp(1, total_pages);
    let mut start_page = current_page.saturating_sub(max_visible / 2).max(1);
    let end_page = total_pages.min(start_page.saturating_add(max_visible - 1));

    if end_page - start_page + 1 < max_visible {
        start_page = end_page.saturating_sub(max_visible - 1).max(1);
    }

    (start_page..=end_page).collect()
}

/// A page of records ready to be rendered with its pagination controls.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page numbers to show, centred on the requested page.
    pub pages: Vec<usize>,
    /// Requested page clamped into `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        total_items: usize,
    ) -> Self {
        let page = current_page.clamp(1, total_pages.max(1));
        let pages = get_pages(total_pages, page, MAX_VISIBLE_PAGES);

        Self {
            items,
            pages,
            page,
            total_pages,
            total_items,
        }
    }

    /// Wraps a slice produced by the list query for page `requested_page`.
    pub fn from_slice(slice: PageSlice<T>, requested_page: usize) -> Self {
        Self::new(
            slice.items,
            requested_page,
            slice.total_pages,
            slice.total_items,
        )
    }
}
