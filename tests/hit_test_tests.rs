//! Hit-testing tests
//!
//! Point-to-cell resolution for body cells, headers, the row-label gutter
//! and the corner, including slot edges and points outside the grid.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use canvas_table::layout::{binary_search_slots, ScrollOffsets, SlotSearch};
use canvas_table::{CellAddress, Point, Rect, TableConfig};
use common::{table, table_with_config};
use test_case::test_case;

#[test_case(50.0, 20.0, 0, 0; "top left corner of first cell")]
#[test_case(169.9, 49.9, 0, 0; "just inside the far edges")]
#[test_case(170.0, 50.0, 1, 1; "far edge belongs to the next slot")]
#[test_case(409.0, 319.0, 9, 2; "last visible cell")]
fn test_body_cell_at_point(x: f64, y: f64, row: usize, column: usize) {
    let table = table(5, 100);
    let hit = table.find_cell_at_point(Point::new(x, y)).unwrap();
    assert_eq!(hit.address, CellAddress::body(row, column));
}

#[test]
fn test_hit_rect_matches_slots() {
    let table = table(5, 100);
    let hit = table.find_cell_at_point(Point::new(200.0, 100.0)).unwrap();
    assert_eq!(hit.rect, Rect::new(170.0, 80.0, 120.0, 30.0));
}

#[test]
fn test_hit_follows_offsets() {
    let mut table = table(5, 100);
    table.set_offsets(ScrollOffsets::new(2, 40));
    let hit = table.find_cell_at_point(Point::new(60.0, 25.0)).unwrap();
    assert_eq!(hit.address, CellAddress::body(40, 2));
}

#[test_case(10.0, 10.0; "corner")]
#[test_case(100.0, 10.0; "column header")]
#[test_case(10.0, 100.0; "row label")]
#[test_case(415.0, 100.0; "vertical scrollbar")]
#[test_case(100.0, 325.0; "horizontal scrollbar")]
#[test_case(-1.0, 100.0; "left of the canvas")]
fn test_strict_lookup_only_matches_body(x: f64, y: f64) {
    let table = table(5, 100);
    assert!(table.find_cell_at_point(Point::new(x, y)).is_none());
}

#[test]
fn test_locate_resolves_headers_and_corner() {
    let table = table(5, 100);
    let corner = table.locate(Point::new(10.0, 10.0)).unwrap();
    assert_eq!(corner.address, CellAddress::corner());
    assert_eq!(corner.rect, Rect::new(0.0, 0.0, 50.0, 20.0));

    let header = table.locate(Point::new(180.0, 5.0)).unwrap();
    assert_eq!(header.address, CellAddress::column_header(1));
    assert_eq!(header.rect, Rect::new(170.0, 0.0, 120.0, 20.0));

    let label = table.locate(Point::new(25.0, 55.0)).unwrap();
    assert_eq!(label.address, CellAddress::row_label(1));
    assert_eq!(label.rect, Rect::new(0.0, 50.0, 50.0, 30.0));
}

#[test]
fn test_locate_ignores_hidden_headers() {
    let config = TableConfig {
        has_column: false,
        ..TableConfig::default()
    };
    let table = table_with_config(5, 100, config);
    // Row 0 now starts at the top; nothing sits above it
    let hit = table.locate(Point::new(25.0, 5.0)).unwrap();
    assert_eq!(hit.address, CellAddress::row_label(0));
    assert!(table.locate(Point::new(25.0, -5.0)).is_none());
}

#[test]
fn test_locate_misses_past_last_slot() {
    let table = table(5, 100);
    assert!(table.locate(Point::new(415.0, 100.0)).is_none());
    assert!(table.locate(Point::new(100.0, 325.0)).is_none());
    assert!(table.locate(Point::new(-3.0, 5.0)).is_none());
}

#[test]
fn test_empty_grid_has_no_cells() {
    let table = table(0, 0);
    assert!(table.find_cell_at_point(Point::new(60.0, 30.0)).is_none());
    assert!(table.locate(Point::new(10.0, 10.0)).is_none());
}

#[test]
fn test_generic_search_over_ranges() {
    let ranges = [(0.0, 5.0), (5.0, 7.5), (10.0, 12.0)];
    let range = |r: &(f64, f64)| *r;
    assert!(matches!(binary_search_slots(&ranges, -0.1, range), SlotSearch::Before));
    assert!(matches!(binary_search_slots(&ranges, 7.4, range), SlotSearch::Hit(r) if r.0 == 5.0));
    // Gap between 7.5 and 10
    assert!(matches!(binary_search_slots(&ranges, 8.0, range), SlotSearch::After));
    assert!(matches!(binary_search_slots(&ranges, 12.0, range), SlotSearch::After));
    assert!(matches!(binary_search_slots(&ranges, f64::NAN, range), SlotSearch::After));
}
