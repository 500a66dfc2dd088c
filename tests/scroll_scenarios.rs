//! Scroll interaction scenarios
//!
//! Buttons, track paging, thumb drags and wheel input against the standard
//! 5 x 100 fixture: 3 columns and 10 rows visible, so at offset 0 the
//! vertical limit is 91 and the horizontal limit is 3.
//!
//! Scrollbar geometry on the fixture:
//! - vertical track x 410..422, up button y 0..12, down button y 308..320
//! - horizontal track y 320..332, backward button x 0..12, forward x 398..410
//! - vertical thumb at offset 0: y 12..22 (floor-sized)
//! - horizontal thumb at offset 0: x 12..89.2

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use canvas_table::layout::ScrollOffsets;
use canvas_table::table::{scroll_limit, PointerInput, PointerKind};
use canvas_table::{Axis, EventResponse, Point, ScrollTrigger, TableEvent};
use common::{click, pointer, table, Recorder};

fn scroll_triggers(recorder: &Recorder) -> Vec<(&'static str, ScrollTrigger)> {
    recorder
        .events()
        .iter()
        .filter_map(|event| match event {
            TableEvent::BeforeScroll { trigger, .. } | TableEvent::Scroll { trigger, .. } => {
                Some((event.name(), *trigger))
            }
            _ => None,
        })
        .collect()
}

fn wheel(delta_y: f64, shift: bool) -> PointerInput {
    PointerInput::wheel(Point::new(100.0, 100.0), delta_y, shift)
}

// ============================================================================
// Buttons
// ============================================================================

#[test]
fn test_forward_button_scrolls_one_column() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);

    table.handle_pointer(&click(404.0, 326.0));

    assert_eq!(table.offsets(), ScrollOffsets::new(1, 0));
    assert_eq!(
        scroll_triggers(&recorder),
        vec![
            ("table-beforescroll", ScrollTrigger::ScrollbarForwardButton),
            ("table-scroll", ScrollTrigger::ScrollbarForwardButton),
        ]
    );
    assert_eq!(ScrollTrigger::ScrollbarForwardButton.as_str(), "scrollbarForwardButton");
    // Scrollbar clicks never reach cells
    assert!(recorder.cell_events().is_empty());
    assert_eq!(table.snapshot().columns[0].index, 1);
}

#[test]
fn test_down_then_up_button() {
    let mut table = table(5, 100);
    table.handle_pointer(&click(416.0, 314.0));
    table.handle_pointer(&click(416.0, 314.0));
    assert_eq!(table.offsets().y, 2);
    table.handle_pointer(&click(416.0, 6.0));
    assert_eq!(table.offsets().y, 1);
}

#[test]
fn test_buttons_at_the_ends_do_nothing() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);
    table.handle_pointer(&click(6.0, 326.0));
    table.handle_pointer(&click(416.0, 6.0));
    assert_eq!(table.offsets(), ScrollOffsets::default());
    assert!(recorder.events().is_empty());
}

#[test]
fn test_forward_button_walks_to_last_column() {
    let mut table = table(5, 100);
    for _ in 0..10 {
        table.handle_pointer(&click(404.0, 326.0));
    }
    // Buttons stop at count - 1, past the drag and wheel limit
    assert_eq!(table.offsets().x, 4);
    assert_eq!(table.snapshot().columns.len(), 1);
}

#[test]
fn test_corner_click_is_ignored() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);
    table.handle_pointer(&click(416.0, 326.0));
    assert_eq!(table.offsets(), ScrollOffsets::default());
    assert!(recorder.events().is_empty());
}

// ============================================================================
// Tracks
// ============================================================================

#[test]
fn test_vertical_track_click_jumps_proportionally() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);
    // (160 - 12) / 296 = 0.5 of the travel
    table.handle_pointer(&click(416.0, 160.0));
    assert_eq!(table.offsets().y, 50);
    assert_eq!(
        scroll_triggers(&recorder)[0].1,
        ScrollTrigger::ScrollbarVerticalTrack
    );
}

#[test]
fn test_horizontal_track_click() {
    let mut table = table(5, 100);
    table.handle_pointer(&click(300.0, 326.0));
    assert_eq!(table.offsets().x, 3);
}

#[test]
fn test_click_on_thumb_is_not_a_track_click() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);
    table.handle_pointer(&click(416.0, 15.0));
    assert_eq!(table.offsets(), ScrollOffsets::default());
    assert!(recorder.events().is_empty());
}

#[test]
fn test_scroll_notifications_carry_offsets() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);

    table.handle_pointer(&click(416.0, 314.0));

    let offsets: Vec<ScrollOffsets> = recorder
        .events()
        .iter()
        .filter_map(|event| match event {
            TableEvent::BeforeScroll { offsets, .. } | TableEvent::Scroll { offsets, .. } => {
                Some(*offsets)
            }
            _ => None,
        })
        .collect();
    assert_eq!(offsets, vec![ScrollOffsets::new(0, 1); 2]);
}

// ============================================================================
// Thumb drag
// ============================================================================

#[test]
fn test_vertical_thumb_drag() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);

    table.handle_pointer(&pointer(PointerKind::DragStart, 416.0, 15.0));
    assert!(table.is_dragging());

    // 29.6px of 296px travel is a tenth of 100 rows
    table.handle_pointer(&pointer(PointerKind::Drag, 416.0, 44.6));
    assert_eq!(table.offsets().y, 10);

    // Far past the end clamps to the scroll limit of the current layout
    assert_eq!(scroll_limit(table.snapshot(), Axis::Vertical), 91);
    table.handle_pointer(&pointer(PointerKind::Drag, 416.0, 5000.0));
    assert_eq!(table.offsets().y, 91);

    // The closing drag event reports bogus coordinates
    table.handle_pointer(&pointer(PointerKind::Drag, -1.0, -1.0));
    assert_eq!(table.offsets().y, 91);

    table.handle_pointer(&pointer(PointerKind::DragEnd, 416.0, 300.0));
    assert!(!table.is_dragging());
    assert!(scroll_triggers(&recorder)
        .iter()
        .all(|(_, trigger)| *trigger == ScrollTrigger::ScrollbarVerticalThumb));
}

#[test]
fn test_drag_is_anchored_to_start() {
    let mut table = table(5, 100);
    table.handle_pointer(&pointer(PointerKind::DragStart, 416.0, 15.0));
    table.handle_pointer(&pointer(PointerKind::Drag, 416.0, 44.6));
    table.handle_pointer(&pointer(PointerKind::Drag, 416.0, 44.6));
    // Repeating the same position does not accumulate
    assert_eq!(table.offsets().y, 10);
    table.handle_pointer(&pointer(PointerKind::Drag, 416.0, 15.0));
    assert_eq!(table.offsets().y, 0);
}

#[test]
fn test_horizontal_thumb_drag() {
    let mut table = table(5, 100);
    table.handle_pointer(&pointer(PointerKind::DragStart, 30.0, 326.0));
    // 77.2px of 386px travel is one of five columns
    table.handle_pointer(&pointer(PointerKind::Drag, 107.2, 326.0));
    assert_eq!(table.offsets().x, 1);
    table.handle_pointer(&pointer(PointerKind::Drag, 400.0, 326.0));
    assert_eq!(table.offsets().x, 3);
}

#[test]
fn test_drag_outside_thumb_does_not_start_session() {
    let mut table = table(5, 100);
    table.handle_pointer(&pointer(PointerKind::DragStart, 200.0, 100.0));
    assert!(!table.is_dragging());
    table.handle_pointer(&pointer(PointerKind::Drag, 200.0, 200.0));
    assert_eq!(table.offsets(), ScrollOffsets::default());
}

#[test]
fn test_model_swap_ends_drag() {
    let mut table = table(5, 100);
    table.handle_pointer(&pointer(PointerKind::DragStart, 416.0, 15.0));
    table.set_model(Box::new(common::grid(5, 100)));
    assert!(!table.is_dragging());
}

// ============================================================================
// Wheel
// ============================================================================

#[test]
fn test_wheel_down_moves_one_row_and_reaches_cells() {
    let mut table = table(5, 100);
    table.set_offsets(ScrollOffsets::new(0, 5));
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);

    table.handle_pointer(&wheel(120.0, false));

    assert_eq!(table.offsets().y, 6);
    assert_eq!(
        recorder.names(),
        vec![
            "table-beforescroll",
            "table-scroll",
            "table-mouseover",
            "table-wheel"
        ]
    );
    // The cell is resolved against the scrolled layout
    let (_, row, column) = recorder.cell_events()[1];
    assert_eq!((row, column), (Some(8), Some(0)));
}

#[test]
fn test_shift_wheel_scrolls_horizontally() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);
    table.handle_pointer(&wheel(1.0, true));
    assert_eq!(table.offsets(), ScrollOffsets::new(1, 0));
    assert_eq!(scroll_triggers(&recorder)[0].1, ScrollTrigger::WheelHorizontal);
}

#[test]
fn test_wheel_stops_on_last_row() {
    let mut table = table(5, 100);
    table.set_offsets(ScrollOffsets::new(0, 99));
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);
    table.handle_pointer(&wheel(3.0, false));
    assert_eq!(table.offsets().y, 99);
    assert!(scroll_triggers(&recorder).is_empty());
    table.handle_pointer(&wheel(-3.0, false));
    assert_eq!(table.offsets().y, 98);
}

#[test]
fn test_wheel_limit_tracks_visible_rows() {
    let mut table = table(5, 100);
    table.set_offsets(ScrollOffsets::new(0, 90));
    // 10 rows visible: limit 91
    table.handle_pointer(&wheel(1.0, false));
    assert_eq!(table.offsets().y, 91);
    // Only 9 rows remain from 91, so the limit moves to 92
    table.handle_pointer(&wheel(1.0, false));
    assert_eq!(table.offsets().y, 92);
    assert_eq!(table.snapshot().rows.len(), 8);
}

#[test]
fn test_zero_wheel_delta_does_not_scroll() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Proceed);
    table.handle_pointer(&wheel(0.0, false));
    assert_eq!(table.offsets(), ScrollOffsets::default());
    assert!(scroll_triggers(&recorder).is_empty());
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_canceled_scroll_keeps_offset() {
    let mut table = table(5, 100);
    let recorder = Recorder::attach(&mut table, EventResponse::Cancel);

    table.handle_pointer(&click(404.0, 326.0));
    table.handle_pointer(&click(416.0, 160.0));

    assert_eq!(table.offsets(), ScrollOffsets::default());
    assert_eq!(
        recorder.names(),
        vec!["table-beforescroll", "table-beforescroll"]
    );
}

#[test]
fn test_one_canceling_listener_is_enough() {
    let mut table = table(5, 100);
    let proceed = Recorder::attach(&mut table, EventResponse::Proceed);
    let _cancel = Recorder::attach(&mut table, EventResponse::Cancel);

    table.handle_pointer(&wheel(1.0, false));

    assert_eq!(table.offsets().y, 0);
    // Both listeners still saw the proposal
    assert_eq!(proceed.names()[0], "table-beforescroll");
    assert!(!proceed.names().contains(&"table-scroll"));
}

#[test]
fn test_scroll_requests_a_repaint() {
    let mut table = table(5, 100);
    let mut backend = common::RecordingBackend::default();
    assert!(table.render(&mut backend));
    assert!(!table.needs_render());
    assert!(table.handle_pointer(&wheel(1.0, false)));
    assert!(table.needs_render());
}
