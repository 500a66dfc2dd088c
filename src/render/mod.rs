//! Rendering engine with pluggable backends.
//!
//! This module provides:
//! - Descriptive per-cell drawing instructions ([`CellPainter`])
//! - Multi-line text measurement and placement
//! - Backend-agnostic frame composition
//! - Canvas 2D backend

pub mod backend;
pub mod canvas;
pub mod frame;
pub mod painter;
pub mod text;

pub use backend::RenderBackend;
pub use canvas::CanvasRenderer;
pub use frame::{paint_cell, render_frame};
pub use painter::{
    BorderEdge, BorderLine, Borders, CellPainter, TextAlign, TextBaseline, TextBlock, TextOptions,
    TextRun,
};
pub use text::{
    measure_block, place_text, split_lines, LineMetrics, MeasuredLine, MeasuredText, PlacedLine,
    PlacedText, TextMeasurer,
};
