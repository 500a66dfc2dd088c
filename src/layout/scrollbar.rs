//! Scrollbar geometry: tracks, thumbs, step buttons and the corner square.

use serde::Serialize;

use super::LayoutInput;
use crate::types::{Axis, Rect};

/// Thumbs are never drawn smaller than this, whatever the item count.
pub const MIN_THUMB_SIZE: f64 = 10.0;

/// Named scrollbar parts; absent parts are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollbarRects {
    pub corner: Option<Rect>,
    pub horizontal_track: Option<Rect>,
    pub horizontal_thumb: Option<Rect>,
    pub backward_button: Option<Rect>,
    pub forward_button: Option<Rect>,
    pub vertical_track: Option<Rect>,
    pub vertical_thumb: Option<Rect>,
    pub up_button: Option<Rect>,
    pub down_button: Option<Rect>,
}

impl ScrollbarRects {
    pub fn track(&self, axis: Axis) -> Option<Rect> {
        match axis {
            Axis::Horizontal => self.horizontal_track,
            Axis::Vertical => self.vertical_track,
        }
    }

    pub fn thumb(&self, axis: Axis) -> Option<Rect> {
        match axis {
            Axis::Horizontal => self.horizontal_thumb,
            Axis::Vertical => self.vertical_thumb,
        }
    }
}

/// Position and length of a thumb along its track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbSpan {
    pub start: f64,
    pub size: f64,
}

/// Thumb placement for `offset` out of `count` items.
///
/// The travel range excludes the two buttons. A proportional thumb below
/// [`MIN_THUMB_SIZE`] is replaced by a floor-sized one spread over the
/// remaining travel, so offset 0 and `count - 1` still touch both ends.
/// Returns `None` for `count <= 1`, and when the travel between the buttons
/// cannot hold a floor-sized thumb.
#[allow(clippy::cast_precision_loss)]
pub fn thumb_span(track_length: f64, scrollbar_width: f64, count: usize, offset: usize) -> Option<ThumbSpan> {
    if count <= 1 {
        return None;
    }
    let offset = offset.min(count - 1) as f64;
    let travel = track_length - scrollbar_width * 2.0;
    if travel <= MIN_THUMB_SIZE {
        return None;
    }
    let size = travel / count as f64;
    if size < MIN_THUMB_SIZE {
        let step = (travel - MIN_THUMB_SIZE) / (count - 1) as f64;
        Some(ThumbSpan {
            start: step * offset + scrollbar_width,
            size: MIN_THUMB_SIZE,
        })
    } else {
        Some(ThumbSpan {
            start: size * offset + scrollbar_width,
            size,
        })
    }
}

/// Build every scrollbar part for a layout pass.
pub fn scrollbar_rects(input: &LayoutInput) -> ScrollbarRects {
    let mut rects = ScrollbarRects::default();
    let content = input.content;
    let sw = input.scrollbar_width;
    let (right, bottom) = (content.right(), content.bottom());

    if input.has_horizontal_scrollbar {
        if input.has_vertical_scrollbar {
            rects.corner = Some(Rect::new(right, bottom, sw, sw));
        }
        rects.horizontal_track = Some(Rect::new(0.0, bottom, right, sw));
        if input.column_count > 1 {
            rects.backward_button = Some(Rect::new(0.0, bottom, sw, sw));
            rects.forward_button = Some(Rect::new(right - sw, bottom, sw, sw));
        }
        if let Some(thumb) = thumb_span(right, sw, input.column_count, input.offsets.x) {
            rects.horizontal_thumb = Some(Rect::new(thumb.start, bottom, thumb.size, sw));
        }
    }

    if input.has_vertical_scrollbar {
        rects.vertical_track = Some(Rect::new(right, 0.0, sw, bottom));
        if input.row_count > 1 {
            rects.up_button = Some(Rect::new(right, 0.0, sw, sw));
            rects.down_button = Some(Rect::new(right, bottom - sw, sw, sw));
        }
        if let Some(thumb) = thumb_span(bottom, sw, input.row_count, input.offsets.y) {
            rects.vertical_thumb = Some(Rect::new(right, thumb.start, sw, thumb.size));
        }
    }

    rects
}
