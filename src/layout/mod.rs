//! Layout engine for visible slots, scrollbar geometry and hit testing.
//!
//! This module handles:
//! - Walking visible columns and rows from the scroll offsets
//! - Scrollbar tracks, thumbs and step buttons
//! - Binary search for cell lookup at canvas coordinates
//! - Viewport size and offsets

mod grid_layout;
mod scrollbar;
mod viewport;

pub use grid_layout::{compute_layout, LayoutInput, LayoutSnapshot, Slot, MIN_SLOT_SIZE};
pub use hit_test::{binary_search_slots, find_cell_at_point, locate, SlotSearch};
pub use scrollbar::{scrollbar_rects, thumb_span, ScrollbarRects, ThumbSpan, MIN_THUMB_SIZE};
pub use viewport::{ScrollOffsets, Viewport};
