//! Default table model: a header row plus rows of JSON values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Sizing, TableModel};
use crate::error::Result;
use crate::render::{CellPainter, TextAlign, TextBaseline, TextOptions};
use crate::types::CellAddress;

const HEADER_BACKGROUND: &str = "#333333";
const HEADER_TEXT_COLOR: &str = "white";
const BODY_BACKGROUND: &str = "white";
const BODY_TEXT_COLOR: &str = "black";
const CELL_FONT: &str = "16px monospace";
const CELL_BORDER_COLOR: &str = "rgba(0,0,0,0.15)";
const CELL_PADDING: f64 = 2.0;

/// A single cell value as it arrives from JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Arrays and objects, shown as compact JSON
    Other(Value),
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Other(Value::Number(n)),
            },
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl CellValue {
    /// Text shown in the cell; `None` for empty cells.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Bool(true) => Some("TRUE".to_string()),
            Self::Bool(false) => Some("FALSE".to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Other(v) => Some(v.to_string()),
        }
    }

    /// Numbers read right-aligned, booleans centered, everything else left.
    pub fn alignment(&self) -> TextAlign {
        match self {
            Self::Number(_) => TextAlign::Right,
            Self::Bool(_) => TextAlign::Center,
            _ => TextAlign::Left,
        }
    }
}

/// Header labels plus row-major data.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DataTable {
    pub header: Vec<CellValue>,
    pub data: Vec<Vec<CellValue>>,
}

static EMPTY: CellValue = CellValue::Empty;

impl DataTable {
    pub fn new(header: Vec<CellValue>, data: Vec<Vec<CellValue>>) -> Self {
        Self { header, data }
    }

    /// Build a table from `{"header": [...], "data": [[...], ...]}`.
    ///
    /// Only unparseable JSON is an error. A missing or non-array `header`
    /// or `data` becomes empty, and a non-array row becomes an empty row.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    pub fn from_value(mut value: Value) -> Self {
        let header = match value.get_mut("header").map(Value::take) {
            Some(Value::Array(items)) => items.into_iter().map(CellValue::from).collect(),
            _ => Vec::new(),
        };
        let data = match value.get_mut("data").map(Value::take) {
            Some(Value::Array(rows)) => rows
                .into_iter()
                .map(|row| match row {
                    Value::Array(cells) => cells.into_iter().map(CellValue::from).collect(),
                    _ => Vec::new(),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self { header, data }
    }

    /// Value at (`row`, `column`); short rows read as empty.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.data
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&EMPTY)
    }
}

impl Sizing for DataTable {}

impl TableModel for DataTable {
    fn column_count(&self) -> usize {
        self.header.len()
    }

    fn row_count(&self) -> usize {
        self.data.len()
    }

    fn draw_cell(&self, painter: &mut CellPainter, address: CellAddress) {
        if self.column_count() == 0 && self.row_count() == 0 {
            return;
        }
        painter.border(CELL_BORDER_COLOR, 1.0);
        match (address.row, address.column) {
            (None, None) => painter.set_background(HEADER_BACKGROUND),
            (None, Some(column)) => {
                painter.set_background(HEADER_BACKGROUND);
                let label = self
                    .header
                    .get(column)
                    .and_then(CellValue::display_text)
                    .unwrap_or_default();
                painter
                    .add_text(TextOptions::new(
                        TextAlign::Center,
                        TextBaseline::Middle,
                        CELL_PADDING,
                    ))
                    .add(label, HEADER_TEXT_COLOR, CELL_FONT);
            }
            (Some(row), None) => {
                painter.set_background(HEADER_BACKGROUND);
                painter
                    .add_text(TextOptions::new(
                        TextAlign::Right,
                        TextBaseline::Middle,
                        CELL_PADDING,
                    ))
                    .add((row + 1).to_string(), HEADER_TEXT_COLOR, CELL_FONT);
            }
            (Some(row), Some(column)) => {
                painter.set_background(BODY_BACKGROUND);
                let value = self.cell(row, column);
                if let Some(text) = value.display_text() {
                    painter
                        .add_text(TextOptions::new(
                            value.alignment(),
                            TextBaseline::Middle,
                            CELL_PADDING,
                        ))
                        .add(text, BODY_TEXT_COLOR, CELL_FONT);
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;
    use crate::types::Rect;
    use test_case::test_case;

    #[test_case("1", CellValue::Number(1.0); "integer")]
    #[test_case("2.5", CellValue::Number(2.5); "float")]
    #[test_case("true", CellValue::Bool(true); "boolean")]
    #[test_case("null", CellValue::Empty; "null")]
    #[test_case("\"abc\"", CellValue::Text("abc".to_string()); "string")]
    fn cell_values_deserialize_by_json_type(json: &str, expected: CellValue) {
        let value: CellValue = serde_json::from_str(json).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn numbers_display_without_trailing_zero() {
        assert_eq!(CellValue::Number(3.0).display_text().as_deref(), Some("3"));
        assert_eq!(CellValue::Number(0.25).display_text().as_deref(), Some("0.25"));
    }

    #[test]
    fn nested_values_display_as_json() {
        let value = CellValue::from(serde_json::json!([1, 2]));
        assert_eq!(value.display_text().as_deref(), Some("[1,2]"));
        assert_eq!(value.alignment(), TextAlign::Left);
    }

    #[test]
    fn short_rows_read_as_empty() {
        let table = DataTable::from_json(r#"{"header": ["a", "b"], "data": [[1]]}"#).unwrap();
        assert_eq!(table.cell(0, 1), &CellValue::Empty);
        assert_eq!(table.cell(5, 0), &CellValue::Empty);
    }

    #[test]
    fn body_number_is_right_aligned() {
        let table = DataTable::from_json(r#"{"header": ["n"], "data": [[42]]}"#).unwrap();
        let mut painter = CellPainter::new(Rect::new(50.0, 20.0, 120.0, 30.0));
        table.draw_cell(&mut painter, CellAddress::body(0, 0));
        assert_eq!(painter.background.as_deref(), Some("white"));
        let block = &painter.text[0];
        assert_eq!(block.options.align, TextAlign::Right);
        assert_eq!(block.runs[0].text, "42");
    }

    #[test]
    fn row_label_is_one_based() {
        let table = DataTable::from_json(r#"{"header": ["n"], "data": [[1], [2]]}"#).unwrap();
        let mut painter = CellPainter::default();
        table.draw_cell(&mut painter, CellAddress::row_label(1));
        assert_eq!(painter.text[0].runs[0].text, "2");
        assert_eq!(painter.text[0].runs[0].color, "white");
    }

    #[test]
    fn empty_body_cell_has_no_text() {
        let table = DataTable::from_json(r#"{"header": ["n"], "data": [[null]]}"#).unwrap();
        let mut painter = CellPainter::default();
        table.draw_cell(&mut painter, CellAddress::body(0, 0));
        assert!(painter.text.is_empty());
        assert!(painter.borders.top.is_some());
    }
}
