//! canvas-table - virtualized data grid for the web
//!
//! Lays out and renders only the visible slice of a large table onto an
//! HTML canvas via WebAssembly and Canvas 2D:
//! - Per-axis slot layout with header row and row-label gutter
//! - Classic scrollbars with buttons, track paging, thumb drag and wheel
//! - Hit-testing from canvas coordinates to cells
//! - Cancelable render and scroll notifications, per-cell pointer events
//!
//! The layout engine, hit-tester and scroll controller are plain Rust and
//! run natively; only [`viewer`] needs a browser.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { CanvasTableView } from 'canvas-table';
//! await init();
//! const view = new CanvasTableView(canvas);
//! view.loadJson(JSON.stringify({ header: ["a", "b"], data: [[1, 2]] }));
//! view.addListener((event) => console.log(event.name));
//! ```

pub mod error;
pub mod layout;
pub mod model;
pub mod render;
pub mod table;
pub mod types;

// Browser host (Canvas 2D, DOM events, ResizeObserver)
#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::CanvasTableView;

pub use error::{CanvasTableError, Result};
pub use layout::{compute_layout, find_cell_at_point, locate, LayoutInput, LayoutSnapshot};
pub use model::{DataTable, Sizing, TableModel};
pub use table::CanvasTable;
pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
