//! Visible-slot layout for one frame.
//!
//! Slots are walked from the scroll offset until the content area is full,
//! so a pass costs O(visible), never O(total rows or columns).

use serde::Serialize;

use super::scrollbar::{scrollbar_rects, ScrollbarRects};
use super::viewport::ScrollOffsets;
use crate::model::Sizing;
use crate::types::{Axis, Rect, TableConfig};

/// Sizes that are non-finite or not positive are replaced with this.
pub const MIN_SLOT_SIZE: f64 = 1.0;

/// One visible column or row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slot {
    /// Model index of the column or row
    pub index: usize,
    /// Left edge (columns) or top edge (rows) in CSS pixels
    pub start: f64,
    /// Width (columns) or height (rows)
    pub size: f64,
}

impl Slot {
    pub fn end(&self) -> f64 {
        self.start + self.size
    }
}

/// Everything a layout pass depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    /// Body area left after headers and scrollbars
    pub content: Rect,
    pub offsets: ScrollOffsets,
    pub column_count: usize,
    pub row_count: usize,
    pub scrollbar_width: f64,
    pub has_horizontal_scrollbar: bool,
    pub has_vertical_scrollbar: bool,
    pub has_column_header: bool,
    pub has_row_header: bool,
}

impl LayoutInput {
    pub fn new(
        content: Rect,
        offsets: ScrollOffsets,
        column_count: usize,
        row_count: usize,
        config: &TableConfig,
    ) -> Self {
        Self {
            content,
            offsets,
            column_count,
            row_count,
            scrollbar_width: config.scrollbar_width,
            has_horizontal_scrollbar: config.has_horizontal_scrollbar,
            has_vertical_scrollbar: config.has_vertical_scrollbar,
            has_column_header: config.has_column,
            has_row_header: config.has_row,
        }
    }
}

/// Result of a layout pass. Rebuilt whole whenever an input changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub content: Rect,
    pub columns: Vec<Slot>,
    pub rows: Vec<Slot>,
    pub scrollbars: ScrollbarRects,
    pub column_count: usize,
    pub row_count: usize,
    pub offsets: ScrollOffsets,
    pub scrollbar_width: f64,
    pub has_column_header: bool,
    pub has_row_header: bool,
}

impl LayoutSnapshot {
    pub fn slots(&self, axis: Axis) -> &[Slot] {
        match axis {
            Axis::Horizontal => &self.columns,
            Axis::Vertical => &self.rows,
        }
    }

    /// Total columns (horizontal) or rows (vertical) in the model.
    pub fn count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.column_count,
            Axis::Vertical => self.row_count,
        }
    }

    /// Number of fully visible slots on `axis`.
    pub fn visible_count(&self, axis: Axis) -> usize {
        self.slots(axis).len()
    }

    /// True when no body cell is visible.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }
}

/// Lay out the visible columns and rows plus scrollbar geometry.
///
/// Slots are kept only when they fit entirely inside the content rectangle,
/// with one exception: the first slot on each axis is always laid out, even
/// when it alone is larger than the content area, so a non-empty grid never
/// draws a blank body. That slot may extend past the content edge.
pub fn compute_layout<S: Sizing + ?Sized>(input: &LayoutInput, sizing: &S) -> LayoutSnapshot {
    let content = input.content;
    let columns = layout_axis(
        content.x,
        content.right(),
        input.offsets.x,
        input.column_count,
        |index| sizing.column_width(Some(index)),
        Axis::Horizontal,
    );
    let rows = layout_axis(
        content.y,
        content.bottom(),
        input.offsets.y,
        input.row_count,
        |index| sizing.row_height(Some(index)),
        Axis::Vertical,
    );
    tracing::trace!(
        columns = columns.len(),
        rows = rows.len(),
        offset_x = input.offsets.x,
        offset_y = input.offsets.y,
        "layout pass"
    );

    LayoutSnapshot {
        content,
        columns,
        rows,
        scrollbars: scrollbar_rects(input),
        column_count: input.column_count,
        row_count: input.row_count,
        offsets: input.offsets,
        scrollbar_width: input.scrollbar_width,
        has_column_header: input.has_column_header,
        has_row_header: input.has_row_header,
    }
}

/// Walk one axis from `first`, keeping slots that end at or before `limit`.
///
/// The first slot is kept even when it alone overflows `limit`; the renderer
/// clips it. A non-positive extent yields nothing.
fn layout_axis(
    start: f64,
    limit: f64,
    first: usize,
    count: usize,
    size_of: impl Fn(usize) -> f64,
    axis: Axis,
) -> Vec<Slot> {
    let mut slots = Vec::new();
    if limit <= start {
        return slots;
    }
    let mut cursor = start;
    for index in first..count {
        let size = sanitize_size(size_of(index), index, axis);
        if !slots.is_empty() && cursor + size > limit {
            break;
        }
        slots.push(Slot {
            index,
            start: cursor,
            size,
        });
        cursor += size;
        if cursor >= limit {
            break;
        }
    }
    slots
}

fn sanitize_size(size: f64, index: usize, axis: Axis) -> f64 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        tracing::warn!(index, ?axis, size, "invalid slot size, clamping");
        MIN_SLOT_SIZE
    }
}
