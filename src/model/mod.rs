//! Table models: grid dimensions, slot sizing and per-cell drawing.
//!
//! The table consumes a model through [`TableModel`]; [`DataTable`] is the
//! default implementation backed by a header row and rows of JSON values.

mod data_table;

pub use data_table::{CellValue, DataTable};

use crate::render::CellPainter;
use crate::types::CellAddress;

/// Default body column width in pixels
pub const DEFAULT_COLUMN_WIDTH: f64 = 120.0;
/// Default width of the row-label gutter in pixels
pub const DEFAULT_GUTTER_WIDTH: f64 = 50.0;
/// Default body row height in pixels
pub const DEFAULT_ROW_HEIGHT: f64 = 30.0;
/// Default height of the column header row in pixels
pub const DEFAULT_HEADER_HEIGHT: f64 = 20.0;

/// Slot sizes consulted by the layout engine.
///
/// `None` asks for the header row height or the row-label gutter width.
/// Implementations must return positive, finite values.
pub trait Sizing {
    fn column_width(&self, column: Option<usize>) -> f64 {
        match column {
            Some(_) => DEFAULT_COLUMN_WIDTH,
            None => DEFAULT_GUTTER_WIDTH,
        }
    }

    fn row_height(&self, row: Option<usize>) -> f64 {
        match row {
            Some(_) => DEFAULT_ROW_HEIGHT,
            None => DEFAULT_HEADER_HEIGHT,
        }
    }
}

/// Data source and render adapter for a table.
pub trait TableModel: Sizing {
    fn column_count(&self) -> usize;

    fn row_count(&self) -> usize;

    /// Describe how the cell at `address` looks. Must not depend on any
    /// table state beyond the address.
    fn draw_cell(&self, painter: &mut CellPainter, address: CellAddress);
}
