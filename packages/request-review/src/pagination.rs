//! Client-side pagination over the store's lists.

use std::ops::RangeInclusive;

use lms_client::ListKind;

use crate::model::Request;
use crate::store::RequestStore;

/// Rows per page on the review tables.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Slice `[(page-1)*size, page*size)` of `items`.
///
/// Page numbers are 1-based. Page 0, pages past the end and a zero page size
/// all give an empty slice.
pub fn page_slice<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    if page_number == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages for `len` items. An empty list still has one (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Page cursor and active tab of one review table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginatedView {
    page_size: usize,
    current_page: usize,
    active: ListKind,
}

impl Default for PaginatedView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginatedView {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            active: ListKind::default(),
        }
    }

    pub fn with_tab(mut self, kind: ListKind) -> Self {
        self.active = kind;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn active(&self) -> ListKind {
        self.active
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    /// Jump to page `n`, clamped to `[1, total_pages]`. Returns the page set.
    pub fn set_page(&mut self, n: usize, len: usize) -> usize {
        self.current_page = n.clamp(1, self.total_pages(len));
        self.current_page
    }

    pub fn next_page(&mut self, len: usize) -> usize {
        self.set_page(self.current_page.saturating_add(1), len)
    }

    pub fn prev_page(&mut self) -> usize {
        self.current_page = self.current_page.saturating_sub(1).max(1);
        self.current_page
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }

    /// Change tab. Always starts over at page 1.
    pub fn switch_tab(&mut self, kind: ListKind) {
        self.active = kind;
        self.current_page = 1;
    }

    /// Pull the cursor back inside the list after it shrank.
    pub fn clamp_to(&mut self, len: usize) {
        self.set_page(self.current_page, len);
    }

    /// 1-based serial number of the `index`-th row on the current page.
    pub fn row_number(&self, index: usize) -> usize {
        (self.current_page - 1) * self.page_size + index + 1
    }

    pub fn page_numbers(&self, len: usize) -> RangeInclusive<usize> {
        1..=self.total_pages(len)
    }

    /// Rows of the active list on the current page.
    pub fn visible<'a>(&self, store: &'a RequestStore) -> &'a [Request] {
        store.get_page(self.active, self.current_page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_forty_five_items_into_twenty_item_pages() {
        let items: Vec<usize> = (0..45).collect();
        assert_eq!(page_slice(&items, 1, 20).len(), 20);
        assert_eq!(page_slice(&items, 2, 20), &items[20..40]);
        assert_eq!(page_slice(&items, 3, 20), &items[40..45]);
        assert!(page_slice(&items, 4, 20).is_empty());
    }

    #[test]
    fn degenerate_inputs_give_empty_pages() {
        let items = [1, 2, 3];
        assert!(page_slice(&items, 0, 20).is_empty());
        assert!(page_slice(&items, 1, 0).is_empty());
        assert!(page_slice(&items, usize::MAX, usize::MAX).is_empty());
        assert!(page_slice::<i32>(&[], 1, 20).is_empty());
    }

    #[test]
    fn empty_list_has_one_page() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
    }

    #[test]
    fn set_page_clamps_into_range() {
        let mut view = PaginatedView::new(20);
        assert_eq!(view.set_page(9, 45), 3);
        assert_eq!(view.set_page(0, 45), 1);
        assert_eq!(view.set_page(5, 0), 1);
    }

    #[test]
    fn prev_and_next_stop_at_bounds() {
        let mut view = PaginatedView::new(20);
        assert!(!view.has_prev());
        assert_eq!(view.prev_page(), 1);
        assert_eq!(view.next_page(45), 2);
        assert_eq!(view.next_page(45), 3);
        assert!(!view.has_next(45));
        assert_eq!(view.next_page(45), 3);
    }

    #[test]
    fn switching_tabs_resets_to_first_page() {
        let mut view = PaginatedView::new(20);
        view.set_page(3, 45);
        view.switch_tab(ListKind::All);
        assert_eq!(view.active(), ListKind::All);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn clamp_follows_a_shrinking_list() {
        let mut view = PaginatedView::new(20);
        view.set_page(3, 41);
        view.clamp_to(40);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn row_numbers_continue_across_pages() {
        let mut view = PaginatedView::new(20);
        assert_eq!(view.row_number(0), 1);
        view.set_page(3, 45);
        assert_eq!(view.row_number(4), 45);
    }

    #[test]
    fn zero_page_size_is_bumped_to_one() {
        let view = PaginatedView::new(0);
        assert_eq!(view.page_size(), 1);
        assert_eq!(view.page_numbers(3), 1..=3);
    }
}
