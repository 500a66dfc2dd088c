//! Viewport state: hosting surface size and scroll offsets.

use serde::{Deserialize, Serialize};

use crate::model::Sizing;
use crate::types::{Axis, Rect, TableConfig};

/// First visible column (`x`) and row (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollOffsets {
    pub x: usize,
    pub y: usize,
}

impl ScrollOffsets {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, value: usize) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}

/// Viewport state - the visible surface and where the grid is scrolled to
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    /// Surface width in CSS pixels
    pub width: f64,
    /// Surface height in CSS pixels
    pub height: f64,
    pub offsets: ScrollOffsets,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            offsets: ScrollOffsets::default(),
        }
    }

    /// Resize the viewport. Non-finite or negative sizes collapse to zero.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
    }

    /// Area left for body cells once the header row, the row-label gutter
    /// and both scrollbars have taken their share.
    pub fn content_rect<S: Sizing + ?Sized>(&self, config: &TableConfig, sizing: &S) -> Rect {
        let x = if config.has_row {
            sizing.column_width(None)
        } else {
            0.0
        };
        let y = if config.has_column {
            sizing.row_height(None)
        } else {
            0.0
        };
        Rect::new(
            x,
            y,
            (self.width - x - config.vertical_scrollbar_space()).max(0.0),
            (self.height - y - config.horizontal_scrollbar_space()).max(0.0),
        )
    }

    /// Clamp offsets to `[0, count - 1]` per axis (0 for an empty axis).
    pub fn clamp_offsets(&mut self, column_count: usize, row_count: usize) {
        self.offsets.x = self.offsets.x.min(column_count.saturating_sub(1));
        self.offsets.y = self.offsets.y.min(row_count.saturating_sub(1));
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
