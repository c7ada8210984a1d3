//! Scrollable list state
//!
//! Owns an ordered sequence and a scroll offset. Row selection is kept by the
//! owner; `ensure_visible` is how the owner keeps a selected row on screen.

use std::ops::Range;

/// A scroll movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOp {
    Down(usize),
    Up(usize),
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollList<T> {
    items: Vec<T>,
    offset: usize,
    viewport: usize,
}

impl<T> Default for ScrollList<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 1)
    }
}

impl<T> ScrollList<T> {
    pub fn new(items: Vec<T>, viewport: usize) -> Self {
        Self {
            items,
            offset: 0,
            viewport: viewport.max(1),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Largest valid offset: `max(0, len - viewport)`
    pub fn max_offset(&self) -> usize {
        self.items.len().saturating_sub(self.viewport)
    }

    /// Indices currently on screen
    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.viewport).min(self.items.len())
    }

    /// Swap the items, keeping the offset if it is still valid.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp();
    }

    pub fn set_viewport(&mut self, viewport: usize) {
        self.viewport = viewport.max(1);
        self.clamp();
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n);
        self.clamp();
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down(self.half_page());
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up(self.half_page());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn apply(&mut self, op: ScrollOp) {
        match op {
            ScrollOp::Down(n) => self.scroll_down(n),
            ScrollOp::Up(n) => self.scroll_up(n),
            ScrollOp::HalfPageDown => self.half_page_down(),
            ScrollOp::HalfPageUp => self.half_page_up(),
            ScrollOp::PageDown => self.page_down(),
            ScrollOp::PageUp => self.page_up(),
            ScrollOp::Top => self.scroll_to_top(),
            ScrollOp::Bottom => self.scroll_to_bottom(),
        }
    }

    /// Move the offset the least amount needed to show `index`.
    pub fn ensure_visible(&mut self, index: usize) {
        if self.items.is_empty() {
            self.offset = 0;
            return;
        }
        let index = index.min(self.items.len() - 1);
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
        self.clamp();
    }

    /// Pull `index` into the visible window.
    pub fn clamp_into_view(&self, index: usize) -> usize {
        let range = self.visible_range();
        if range.is_empty() {
            return 0;
        }
        index.clamp(range.start, range.end - 1)
    }

    fn half_page(&self) -> usize {
        (self.viewport / 2).max(1)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
