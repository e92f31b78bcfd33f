//! Outline viewport calculations
//!
//! Tracks which slice of the row list is visible inside the panel rect and
//! maps pointer positions back to rows. Layout from top to bottom: title bar,
//! rows, footer lines.

use crate::model::Rect;

/// Extra space under the title text, in logical pixels
pub const TITLE_PADDING: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineViewport {
    pub rect: Rect,
    pub row_height: f32,
    /// First visible row (0-indexed)
    pub scroll_offset: usize,
}

impl OutlineViewport {
    pub fn new(rect: Rect, row_height: f32) -> Self {
        Self {
            rect,
            row_height,
            scroll_offset: 0,
        }
    }

    pub fn title_height(&self) -> f32 {
        self.row_height + TITLE_PADDING
    }

    /// Top of the first row
    pub fn content_y(&self) -> f32 {
        self.rect.y + self.title_height()
    }

    /// Number of rows that fit between the title bar and `footer_lines` footer lines
    pub fn visible_rows(&self, footer_lines: usize) -> usize {
        if self.row_height <= 0.0 {
            return 0;
        }
        let footer = footer_lines as f32 * self.row_height;
        let content = (self.rect.height - self.title_height() - footer).max(0.0);
        (content / self.row_height).floor() as usize
    }

    fn max_offset(&self, total: usize, footer_lines: usize) -> usize {
        total.saturating_sub(self.visible_rows(footer_lines))
    }

    /// Keep the offset within the content after the row count changed
    pub fn clamp(&mut self, total: usize, footer_lines: usize) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset(total, footer_lines));
    }

    /// Scroll by `lines` (positive = down), staying within bounds
    pub fn scroll_by(&mut self, lines: i32, total: usize, footer_lines: usize) {
        let offset = self.scroll_offset;
        self.scroll_offset = if lines < 0 {
            offset.saturating_sub(lines.unsigned_abs() as usize)
        } else {
            offset + lines as usize
        };
        self.clamp(total, footer_lines);
    }

    /// Put `row` in the middle of the visible rows when the content allows it
    pub fn center_on(&mut self, row: usize, total: usize, footer_lines: usize) {
        let visible = self.visible_rows(footer_lines);
        self.scroll_offset = row.saturating_sub(visible / 2);
        self.clamp(total, footer_lines);
    }

    pub fn is_row_visible(&self, row: usize, footer_lines: usize) -> bool {
        row >= self.scroll_offset && row < self.scroll_offset + self.visible_rows(footer_lines)
    }

    /// Row under a pointer position; the title bar and footer are not rows
    pub fn row_at(&self, x: f32, y: f32, total: usize, footer_lines: usize) -> Option<usize> {
        if !self.rect.contains(x, y) || y < self.content_y() {
            return None;
        }
        let slot = ((y - self.content_y()) / self.row_height).floor() as usize;
        if slot >= self.visible_rows(footer_lines) {
            return None;
        }
        let row = self.scroll_offset + slot;
        (row < total).then_some(row)
    }
}
