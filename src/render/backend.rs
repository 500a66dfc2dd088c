//! Render backend trait for pluggable drawing surfaces.
//!
//! A backend only knows primitive operations. Frame composition (what is
//! drawn, in which order) lives in [`super::frame`] so every backend draws
//! the same frame.

use super::text::{PlacedText, TextMeasurer};
use crate::error::Result;
use crate::types::{Point, Rect};

/// Trait for render backends
///
/// Coordinates are CSS pixels; backends apply the device pixel ratio.
pub trait RenderBackend: TextMeasurer {
    /// Initialize the backend
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Resize the render surface (CSS pixels)
    fn resize(&mut self, width: u32, height: u32, dpr: f64);

    /// Clear the whole surface before a frame
    fn clear(&mut self);

    /// Save state and restrict drawing to `rect` until [`Self::pop_clip`]
    fn push_clip(&mut self, rect: Rect);

    /// Restore the state saved by the matching [`Self::push_clip`]
    fn pop_clip(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: &str);

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: &str);

    fn fill_text(&mut self, text: &PlacedText);

    /// Get the current width
    fn width(&self) -> u32;

    /// Get the current height
    fn height(&self) -> u32;
}
