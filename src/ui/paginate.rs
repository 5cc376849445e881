//! Listing pagination for fspick.
//!
//! The prompt is inline, so tall listings must be windowed to a fixed number
//! of rows. The window slides to keep the active row roughly centered once
//! the top of the list scrolls away, and pins to the list end rather than
//! showing blank rows.

use std::ops::Range;

/// Computes the visible slice of the listing rows.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Paginator {
            page_size: page_size.max(1),
        }
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index range of the rows to show for a list of `len` rows with the
    /// cursor on row `active`. The active row is always inside the range.
    pub fn window(&self, len: usize, active: usize) -> Range<usize> {
        if len <= self.page_size {
            return 0..len;
        }

        let half = self.page_size / 2;
        let start = active.saturating_sub(half).min(len - self.page_size);
        start..start + self.page_size
    }
}
