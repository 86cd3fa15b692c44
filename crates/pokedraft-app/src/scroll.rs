// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Scroll offset corrections for the dropdown list.
//!
//! The functions here only see rendered extents (a row and the viewport, both
//! in screen coordinates) plus the current offset, and return the corrected
//! offset. Offsets never go negative.

/// A vertical span in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    pub top: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    pub const fn bottom(self) -> i32 {
        self.top + self.height
    }

    pub const fn intersects(self, other: Extent) -> bool {
        self.height > 0 && other.height > 0 && self.top < other.bottom() && other.top < self.bottom()
    }
}

/// Pulls the list back to its top after wrapping from the last row to the
/// first. `first_row` is the extent of row 0 as currently rendered, so the
/// correction lands row 0 on the viewport top whatever the row height.
pub fn scroll_to_top(first_row: Extent, viewport: Extent, offset: i32) -> i32 {
    clamp_offset(offset + first_row.top - viewport.top)
}

/// Scrolls down by exactly the amount `row` overflows the viewport bottom.
pub fn scroll_down(row: Extent, viewport: Extent, offset: i32) -> i32 {
    if row.bottom() > viewport.bottom() {
        offset + (row.bottom() - viewport.bottom())
    } else {
        offset
    }
}

/// Scrolls up by one row height when `row` starts above the viewport top.
pub fn scroll_up(row: Extent, viewport: Extent, offset: i32) -> i32 {
    if row.top < viewport.top {
        clamp_offset(offset - row.height)
    } else {
        offset
    }
}

fn clamp_offset(offset: i32) -> i32 {
    offset.max(0)
}

/// Geometry of a scrollable list of equally tall rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowViewport {
    pub viewport: Extent,
    pub row_height: i32,
    pub offset: i32,
}

impl Default for RowViewport {
    fn default() -> Self {
        Self {
            viewport: Extent::default(),
            row_height: 1,
            offset: 0,
        }
    }
}

impl RowViewport {
    pub const fn new(viewport: Extent, row_height: i32) -> Self {
        Self {
            viewport,
            row_height,
            offset: 0,
        }
    }

    /// Where row `index` currently sits on screen.
    pub fn row(&self, index: usize) -> Extent {
        let index = i32::try_from(index).unwrap_or(i32::MAX / 2);
        Extent::new(
            self.viewport
                .top
                .saturating_add(index.saturating_mul(self.row_height))
                .saturating_sub(self.offset),
            self.row_height,
        )
    }

    pub fn is_row_visible(&self, index: usize) -> bool {
        self.row(index).intersects(self.viewport)
    }

    /// Index of the row covering screen line `y`, if any.
    pub fn row_at(&self, y: i32) -> Option<usize> {
        if self.row_height <= 0 || y < self.viewport.top || y >= self.viewport.bottom() {
            return None;
        }
        let content_y = y - self.viewport.top + self.offset;
        usize::try_from(content_y / self.row_height).ok()
    }

    /// First row index drawn at the top of the viewport.
    pub fn first_visible_row(&self) -> usize {
        if self.row_height <= 0 {
            return 0;
        }
        usize::try_from(self.offset / self.row_height).unwrap_or(0)
    }

    pub fn set_viewport(&mut self, viewport: Extent) {
        self.viewport = viewport;
    }
}
