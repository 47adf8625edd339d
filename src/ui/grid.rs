//! Card grid geometry and scroll position, in terminal cells.
//!
//! The grid is a virtual canvas `columns` cards wide; card `i` sits at row
//! `i / columns`. Only the rows inside [`ScrollState::viewport`] are drawn.

use crate::lazy::{Span, ThumbnailSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: u16,
    card_width: u16,
    card_height: u16,
}

impl GridLayout {
    pub fn new(body_width: u16, card_width: u16, card_height: u16) -> Self {
        let card_width = card_width.max(1);
        Self {
            columns: (body_width / card_width).max(1),
            card_width,
            card_height: card_height.max(1),
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn card_width(&self) -> u16 {
        self.card_width
    }

    pub fn card_height(&self) -> u16 {
        self.card_height
    }

    /// Column of card `index`.
    pub fn card_column(&self, index: usize) -> u16 {
        (index % usize::from(self.columns)) as u16
    }

    /// Rows occupied by card `index` on the virtual canvas.
    pub fn card_span(&self, index: usize) -> Span {
        let row = (index / usize::from(self.columns)) as u32;
        Span::new(row * u32::from(self.card_height), u32::from(self.card_height))
    }

    /// Canvas height needed for `count` cards.
    pub fn total_rows(&self, count: usize) -> u32 {
        let rows = count.div_ceil(usize::from(self.columns)) as u32;
        rows * u32::from(self.card_height)
    }

    /// Image area inside a card's border.
    pub fn image_size(&self) -> ThumbnailSize {
        ThumbnailSize::new(
            self.card_width.saturating_sub(2),
            self.card_height.saturating_sub(2),
        )
    }
}

/// Vertical scroll position of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u32,
    height: u16,
}

impl ScrollState {
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    /// Visible rows of the canvas.
    pub fn viewport(&self) -> Span {
        Span::new(self.offset, u32::from(self.height))
    }

    pub fn max_offset(&self, total_rows: u32) -> u32 {
        total_rows.saturating_sub(u32::from(self.height))
    }

    pub fn scroll_by(&mut self, delta: i32, total_rows: u32) {
        let target = i64::from(self.offset) + i64::from(delta);
        let max = i64::from(self.max_offset(total_rows));
        self.offset = target.clamp(0, max) as u32;
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self, total_rows: u32) {
        self.offset = self.max_offset(total_rows);
    }

    pub fn clamp(&mut self, total_rows: u32) {
        self.offset = self.offset.min(self.max_offset(total_rows));
    }
}
