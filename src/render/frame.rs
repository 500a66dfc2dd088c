//! Frame composition shared by every backend.
//!
//! Paint order: header corner, column headers, row labels, body cells,
//! then scrollbars (corner square, tracks, buttons, thumbs).

use super::backend::RenderBackend;
use super::painter::{BorderEdge, CellPainter};
use super::text::{measure_block, place_text};
use crate::layout::LayoutSnapshot;
use crate::model::TableModel;
use crate::types::{CellAddress, Point, Rect, TableConfig};

/// Draw one frame of `model` as laid out in `snapshot`.
pub fn render_frame<B, M>(backend: &mut B, model: &M, snapshot: &LayoutSnapshot, config: &TableConfig)
where
    B: RenderBackend + ?Sized,
    M: TableModel + ?Sized,
{
    backend.clear();
    let content = snapshot.content;
    let mut painter = CellPainter::default();
    let mut cells = 0usize;

    let mut draw = |backend: &mut B, address: CellAddress, rect: Rect| {
        painter.reset(rect);
        model.draw_cell(&mut painter, address);
        paint_cell(backend, &painter);
        cells += 1;
    };

    if snapshot.has_column_header {
        if snapshot.has_row_header {
            draw(backend, CellAddress::corner(), Rect::new(0.0, 0.0, content.x, content.y));
        }
        for column in &snapshot.columns {
            draw(
                backend,
                CellAddress::column_header(column.index),
                Rect::new(column.start, 0.0, column.size, content.y),
            );
        }
    }
    if snapshot.has_row_header {
        for row in &snapshot.rows {
            draw(
                backend,
                CellAddress::row_label(row.index),
                Rect::new(0.0, row.start, content.x, row.size),
            );
        }
    }
    for row in &snapshot.rows {
        for column in &snapshot.columns {
            draw(
                backend,
                CellAddress::body(row.index, column.index),
                Rect::new(column.start, row.start, column.size, row.size),
            );
        }
    }

    render_scrollbars(backend, snapshot, config);
    tracing::trace!(cells, "frame drawn");
}

/// Clip to the cell, then background, text blocks and borders.
pub fn paint_cell<B: RenderBackend + ?Sized>(backend: &mut B, painter: &CellPainter) {
    if painter.is_blank() {
        return;
    }
    let rect = painter.rect;
    backend.push_clip(rect);
    if let Some(background) = &painter.background {
        backend.fill_rect(rect, background);
    }
    for block in &painter.text {
        let measured = measure_block(backend, block);
        let placed = place_text(&measured, rect, &block.options);
        backend.fill_text(&placed);
    }
    for (edge, line) in painter.borders.iter() {
        let (from, to) = edge_endpoints(rect, edge);
        backend.stroke_line(from, to, line.width, &line.color);
    }
    backend.pop_clip();
}

fn edge_endpoints(rect: Rect, edge: BorderEdge) -> (Point, Point) {
    let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());
    match edge {
        BorderEdge::Left => (Point::new(left, top), Point::new(left, bottom)),
        BorderEdge::Right => (Point::new(right, top), Point::new(right, bottom)),
        BorderEdge::Top => (Point::new(left, top), Point::new(right, top)),
        BorderEdge::Bottom => (Point::new(left, bottom), Point::new(right, bottom)),
        BorderEdge::DiagonalUp => (Point::new(left, bottom), Point::new(right, top)),
        BorderEdge::DiagonalDown => (Point::new(left, top), Point::new(right, bottom)),
    }
}

fn render_scrollbars<B: RenderBackend + ?Sized>(backend: &mut B, snapshot: &LayoutSnapshot, config: &TableConfig) {
    let bars = &snapshot.scrollbars;
    let groups = [
        (config.scrollbar_corner_color.as_str(), [bars.corner, None, None, None]),
        (
            config.scrollbar_track_color.as_str(),
            [bars.horizontal_track, bars.vertical_track, None, None],
        ),
        (
            config.scrollbar_button_color.as_str(),
            [bars.backward_button, bars.forward_button, bars.up_button, bars.down_button],
        ),
        (
            config.scrollbar_thumb_color.as_str(),
            [bars.horizontal_thumb, bars.vertical_thumb, None, None],
        ),
    ];
    for (color, rects) in groups {
        for rect in rects.into_iter().flatten() {
            backend.fill_rect(rect, color);
        }
    }
}
