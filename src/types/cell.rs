use serde::{Deserialize, Serialize};

use super::Rect;

/// Logical address of a grid cell.
///
/// `None` on an axis marks the header row (`row`) or the row-label gutter
/// (`column`); `(None, None)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellAddress {
    pub row: Option<usize>,
    pub column: Option<usize>,
}

impl CellAddress {
    /// Address of a body cell
    pub const fn body(row: usize, column: usize) -> Self {
        Self {
            row: Some(row),
            column: Some(column),
        }
    }

    /// Address of a column header cell
    pub const fn column_header(column: usize) -> Self {
        Self {
            row: None,
            column: Some(column),
        }
    }

    /// Address of a row label cell
    pub const fn row_label(row: usize) -> Self {
        Self {
            row: Some(row),
            column: None,
        }
    }

    /// Address of the corner above the row labels
    pub const fn corner() -> Self {
        Self {
            row: None,
            column: None,
        }
    }

    pub fn is_body(&self) -> bool {
        self.row.is_some() && self.column.is_some()
    }
}

/// A resolved cell together with its on-canvas rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellHit {
    pub address: CellAddress,
    pub rect: Rect,
}
