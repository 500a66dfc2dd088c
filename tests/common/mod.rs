//! Shared fixtures for the integration tests.
//!
//! The standard fixture is a 422x332 canvas with default configuration:
//! a 50px row-label gutter, a 20px header row and 12px scrollbars leave a
//! 360x300 body at (50, 20), which fits 3 columns and 10 rows.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_precision_loss
)]

use std::cell::RefCell;
use std::rc::Rc;

use canvas_table::model::CellValue;
use canvas_table::render::{LineMetrics, PlacedText, RenderBackend, TextMeasurer};
use canvas_table::table::{PointerInput, PointerKind};
use canvas_table::{
    CanvasTable, CellEventKind, DataTable, EventResponse, Point, Rect, TableConfig, TableEvent,
};

pub const CANVAS_WIDTH: f64 = 422.0;
pub const CANVAS_HEIGHT: f64 = 332.0;

/// `columns` x `rows` grid; cell (r, c) holds `r * columns + c`.
pub fn grid(columns: usize, rows: usize) -> DataTable {
    let header: Vec<CellValue> = (0..columns).map(|c| format!("col{c}").into()).collect();
    let data = (0..rows)
        .map(|r| (0..columns).map(|c| ((r * columns + c) as f64).into()).collect())
        .collect();
    DataTable::new(header, data)
}

/// The standard fixture with `columns` x `rows` cells.
pub fn table(columns: usize, rows: usize) -> CanvasTable {
    table_with_config(columns, rows, TableConfig::default())
}

pub fn table_with_config(columns: usize, rows: usize, config: TableConfig) -> CanvasTable {
    let mut table = CanvasTable::new(Box::new(grid(columns, rows)), config);
    table.resize(CANVAS_WIDTH, CANVAS_HEIGHT);
    table
}

/// Every notification a table emitted, in order.
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<TableEvent>>>);

impl Recorder {
    /// Subscribe a recorder that answers every notification with `response`.
    pub fn attach(table: &mut CanvasTable, response: EventResponse) -> Self {
        let recorder = Self::default();
        let sink = Rc::clone(&recorder.0);
        table.subscribe(move |event| {
            sink.borrow_mut().push(event.clone());
            response
        });
        recorder
    }

    pub fn events(&self) -> Vec<TableEvent> {
        self.0.borrow().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.borrow().iter().map(TableEvent::name).collect()
    }

    /// Cell notifications only, as (kind, row, column).
    pub fn cell_events(&self) -> Vec<(CellEventKind, Option<usize>, Option<usize>)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                TableEvent::Cell { kind, hit } => {
                    Some((*kind, hit.address.row, hit.address.column))
                }
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub fn pointer(kind: PointerKind, x: f64, y: f64) -> PointerInput {
    PointerInput::new(kind, Point::new(x, y))
}

pub fn click(x: f64, y: f64) -> PointerInput {
    pointer(PointerKind::Click, x, y)
}

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    Clip(Rect),
    Restore,
    Fill(Rect, String),
    Line(Point, Point),
    Text(Vec<String>),
}

/// Backend that records calls instead of drawing. Text is 8px per char
/// and 16px per line.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub ops: Vec<Op>,
    pub size: (u32, u32),
}

impl RecordingBackend {
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(lines) => Some(lines.join("\n")),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self, color: &str) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(rect, c) if c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasurer for RecordingBackend {
    fn measure_text(&mut self, text: &str, _font: &str) -> LineMetrics {
        LineMetrics {
            width: text.chars().count() as f64 * 8.0,
            height: 16.0,
        }
    }
}

impl RenderBackend for RecordingBackend {
    fn resize(&mut self, width: u32, height: u32, _dpr: f64) {
        self.size = (width, height);
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ops.push(Op::Clip(rect));
    }

    fn pop_clip(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(Op::Fill(rect, color.to_string()));
    }

    fn stroke_line(&mut self, from: Point, to: Point, _width: f64, _color: &str) {
        self.ops.push(Op::Line(from, to));
    }

    fn fill_text(&mut self, text: &PlacedText) {
        self.ops.push(Op::Text(
            text.lines.iter().map(|line| line.text.clone()).collect(),
        ));
    }

    fn width(&self) -> u32 {
        self.size.0
    }

    fn height(&self) -> u32 {
        self.size.1
    }
}
