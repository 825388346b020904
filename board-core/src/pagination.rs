use serde::Serialize;

use crate::error::BoardError;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Current page (1-based) and page size of a listing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    page: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page: usize, page_size: usize) -> Result<Self, BoardError> {
        let mut state = Self::default();
        state.set_page(page)?;
        state.set_page_size(page_size)?;
        Ok(state)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) -> Result<(), BoardError> {
        if page == 0 {
            return Err(BoardError::InvalidPagination(
                "page numbers start at 1".to_string(),
            ));
        }
        self.page = page;
        Ok(())
    }

    /// Keeps the current page even if it no longer has any items.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), BoardError> {
        if page_size == 0 {
            return Err(BoardError::InvalidPagination(
                "page size must be positive".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(())
    }
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Page numbers for a pagination control, `None` marking a gap. A current
/// page past the end is drawn as if on the last page.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let current_page = current_page.clamp(1, total_pages.max(1));
    window(total_pages, current_page, 2, 2, 2, 2)
}

fn window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;
    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page.saturating_add(1));
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page.saturating_add(1));
    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);
    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}
