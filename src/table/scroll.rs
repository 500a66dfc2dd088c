//! Scroll controller: scrollbar clicks, thumb drags and wheel input turned
//! into discrete offset proposals.
//!
//! The controller never commits anything. It returns a
//! [`ProposedOffsetChange`] and the table decides, after the cancelable
//! before-scroll notification, whether to apply it.

use super::events::{PointerInput, PointerKind};
use crate::layout::{LayoutSnapshot, ScrollOffsets};
use crate::types::{Axis, Point, Rect, ScrollTrigger};

/// A classified scroll gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollGesture {
    /// One of the four step buttons, named by its trigger
    Button(ScrollTrigger),
    /// Click on a track outside its thumb
    TrackClick { axis: Axis, point: Point },
    /// Drag started over a thumb
    DragStart { axis: Axis, point: Point },
    DragMove { point: Point },
    DragEnd,
    Wheel { delta_y: f64, shift: bool },
}

impl ScrollGesture {
    /// Scrollbar gestures swallow the input; wheel input still reaches cells.
    pub fn consumes_input(&self) -> bool {
        !matches!(self, Self::Wheel { .. })
    }
}

/// Open thumb drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub axis: Axis,
    /// Pointer coordinate along `axis` at drag start
    pub anchor_pixel: f64,
    /// Offset on `axis` at drag start
    pub anchor_offset: usize,
}

/// An offset change awaiting the before-scroll notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedOffsetChange {
    pub axis: Axis,
    pub offset: usize,
    pub trigger: ScrollTrigger,
}

/// Scrollbar interaction state. Holds at most one drag session.
#[derive(Debug, Clone, Default)]
pub struct ScrollController {
    drag: Option<DragSession>,
}

impl ScrollController {
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Drop any open drag session.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Work out which scroll gesture, if any, `input` is.
    ///
    /// Clicks test the buttons (backward, forward, up, down) and then each
    /// track outside its thumb. Drag moves and drag ends only count while
    /// a session is open.
    pub fn classify(&self, input: &PointerInput, snapshot: &LayoutSnapshot) -> Option<ScrollGesture> {
        let bars = &snapshot.scrollbars;
        let point = input.point;
        let inside = |rect: Option<Rect>| rect.is_some_and(|rect| rect.contains(point));
        match input.kind {
            PointerKind::Click => {
                let buttons = [
                    (bars.backward_button, ScrollTrigger::ScrollbarBackwardButton),
                    (bars.forward_button, ScrollTrigger::ScrollbarForwardButton),
                    (bars.up_button, ScrollTrigger::ScrollbarUpButton),
                    (bars.down_button, ScrollTrigger::ScrollbarDownButton),
                ];
                if let Some((_, trigger)) = buttons.into_iter().find(|(rect, _)| inside(*rect)) {
                    return Some(ScrollGesture::Button(trigger));
                }
                [Axis::Horizontal, Axis::Vertical]
                    .into_iter()
                    .find(|axis| inside(bars.track(*axis)) && !inside(bars.thumb(*axis)))
                    .map(|axis| ScrollGesture::TrackClick { axis, point })
            }
            PointerKind::DragStart => [Axis::Horizontal, Axis::Vertical]
                .into_iter()
                .find(|axis| inside(bars.thumb(*axis)))
                .map(|axis| ScrollGesture::DragStart { axis, point }),
            PointerKind::Drag if self.drag.is_some() => Some(ScrollGesture::DragMove { point }),
            PointerKind::DragEnd if self.drag.is_some() => Some(ScrollGesture::DragEnd),
            PointerKind::Wheel => Some(ScrollGesture::Wheel {
                delta_y: input.delta_y,
                shift: input.shift,
            }),
            _ => None,
        }
    }

    /// Turn a gesture into a proposed offset change.
    ///
    /// Returns `None` when the gesture does not move anything, including
    /// when the proposal equals the current offset.
    pub fn handle_scroll_intent(
        &mut self,
        gesture: ScrollGesture,
        offsets: ScrollOffsets,
        snapshot: &LayoutSnapshot,
    ) -> Option<ProposedOffsetChange> {
        match gesture {
            ScrollGesture::Button(trigger) => {
                let axis = trigger.axis();
                let current = offsets.get(axis);
                let last = snapshot.count(axis).saturating_sub(1);
                let offset = match trigger {
                    ScrollTrigger::ScrollbarBackwardButton | ScrollTrigger::ScrollbarUpButton => {
                        current.saturating_sub(1)
                    }
                    _ => current.saturating_add(1).min(last),
                };
                propose(axis, current, offset, trigger)
            }
            ScrollGesture::TrackClick { axis, point } => {
                let track = snapshot.scrollbars.track(axis)?;
                let count = snapshot.count(axis);
                let sw = snapshot.scrollbar_width;
                let travel = track_length(track, axis) - 2.0 * sw;
                if count == 0 || travel <= 0.0 {
                    return None;
                }
                let relative = (along(point, axis) - track_start(track, axis) - sw) / travel;
                #[allow(clippy::cast_precision_loss)]
                let offset = to_index((relative * count as f64).floor(), count - 1);
                let trigger = match axis {
                    Axis::Horizontal => ScrollTrigger::ScrollbarHorizontalTrack,
                    Axis::Vertical => ScrollTrigger::ScrollbarVerticalTrack,
                };
                propose(axis, offsets.get(axis), offset, trigger)
            }
            ScrollGesture::DragStart { axis, point } => {
                if let Some(active) = &self.drag {
                    tracing::debug!(active = ?active.axis, requested = ?axis, "drag already active");
                    return None;
                }
                self.drag = Some(DragSession {
                    axis,
                    anchor_pixel: along(point, axis),
                    anchor_offset: offsets.get(axis),
                });
                None
            }
            ScrollGesture::DragMove { point } => {
                let session = self.drag?;
                // Browsers report negative coordinates on the final drag event
                if point.x < 0.0 && point.y < 0.0 {
                    return None;
                }
                let axis = session.axis;
                let track = snapshot.scrollbars.track(axis)?;
                let count = snapshot.count(axis);
                let travel = track_length(track, axis) - 2.0 * snapshot.scrollbar_width;
                if count == 0 || travel <= 0.0 {
                    return None;
                }
                let delta = along(point, axis) - session.anchor_pixel;
                #[allow(clippy::cast_precision_loss)]
                let target = session.anchor_offset as f64 + (delta * count as f64 / travel).round();
                let offset = to_index(target, scroll_limit(snapshot, axis));
                let trigger = match axis {
                    Axis::Horizontal => ScrollTrigger::ScrollbarHorizontalThumb,
                    Axis::Vertical => ScrollTrigger::ScrollbarVerticalThumb,
                };
                propose(axis, offsets.get(axis), offset, trigger)
            }
            ScrollGesture::DragEnd => {
                self.drag = None;
                None
            }
            ScrollGesture::Wheel { delta_y, shift } => {
                let (axis, trigger) = if shift {
                    (Axis::Horizontal, ScrollTrigger::WheelHorizontal)
                } else {
                    (Axis::Vertical, ScrollTrigger::WheelVertical)
                };
                let current = offsets.get(axis);
                let limit = scroll_limit(snapshot, axis);
                let offset = if delta_y > 0.0 {
                    if current >= limit {
                        return None;
                    }
                    current + 1
                } else if delta_y < 0.0 {
                    current.saturating_sub(1).min(limit)
                } else {
                    return None;
                };
                propose(axis, current, offset, trigger)
            }
        }
    }
}

/// Highest offset reachable by wheel and thumb drag on `axis`:
/// `min(count - visible + 1, count - 1)`.
pub fn scroll_limit(snapshot: &LayoutSnapshot, axis: Axis) -> usize {
    let count = snapshot.count(axis);
    let visible = snapshot.visible_count(axis);
    count
        .saturating_add(1)
        .saturating_sub(visible)
        .min(count.saturating_sub(1))
}

fn propose(axis: Axis, current: usize, offset: usize, trigger: ScrollTrigger) -> Option<ProposedOffsetChange> {
    (offset != current).then_some(ProposedOffsetChange {
        axis,
        offset,
        trigger,
    })
}

/// Clamp a floating offset into `[0, max]`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn to_index(value: f64, max: usize) -> usize {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= max as f64 {
        max
    } else {
        value as usize
    }
}

fn along(point: Point, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => point.x,
        Axis::Vertical => point.y,
    }
}

fn track_start(track: Rect, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => track.x,
        Axis::Vertical => track.y,
    }
}

fn track_length(track: Rect, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => track.width,
        Axis::Vertical => track.height,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::layout::{compute_layout, LayoutInput};
    use crate::model::Sizing;
    use crate::types::TableConfig;

    struct Defaults;
    impl Sizing for Defaults {}

    /// 5 columns x 100 rows over a 360x300 body: 3 columns and 10 rows fit.
    fn snapshot(offsets: ScrollOffsets) -> LayoutSnapshot {
        let input = LayoutInput::new(
            Rect::new(50.0, 20.0, 360.0, 300.0),
            offsets,
            5,
            100,
            &TableConfig::default(),
        );
        compute_layout(&input, &Defaults)
    }

    #[test]
    fn layout_fixture_shows_three_columns_and_ten_rows() {
        let snap = snapshot(ScrollOffsets::default());
        assert_eq!(snap.visible_count(Axis::Horizontal), 3);
        assert_eq!(snap.visible_count(Axis::Vertical), 10);
        assert_eq!(scroll_limit(&snap, Axis::Vertical), 91);
        assert_eq!(scroll_limit(&snap, Axis::Horizontal), 3);
    }

    #[test]
    fn backward_button_at_zero_is_a_no_op() {
        let snap = snapshot(ScrollOffsets::default());
        let mut controller = ScrollController::default();
        let gesture = ScrollGesture::Button(ScrollTrigger::ScrollbarBackwardButton);
        assert!(controller
            .handle_scroll_intent(gesture, ScrollOffsets::default(), &snap)
            .is_none());
    }

    #[test]
    fn forward_button_stops_at_last_column() {
        let offsets = ScrollOffsets::new(4, 0);
        let snap = snapshot(offsets);
        let mut controller = ScrollController::default();
        let gesture = ScrollGesture::Button(ScrollTrigger::ScrollbarForwardButton);
        assert!(controller.handle_scroll_intent(gesture, offsets, &snap).is_none());
    }

    #[test]
    fn wheel_stops_on_last_row() {
        let offsets = ScrollOffsets::new(0, 99);
        let snap = snapshot(offsets);
        assert_eq!(scroll_limit(&snap, Axis::Vertical), 99);
        let mut controller = ScrollController::default();
        let down = ScrollGesture::Wheel {
            delta_y: 3.0,
            shift: false,
        };
        assert!(controller.handle_scroll_intent(down, offsets, &snap).is_none());
        let up = ScrollGesture::Wheel {
            delta_y: -3.0,
            shift: false,
        };
        let change = controller.handle_scroll_intent(up, offsets, &snap).unwrap();
        assert_eq!(change.offset, 98);
        assert_eq!(change.trigger, ScrollTrigger::WheelVertical);
    }

    #[test]
    fn limit_follows_visible_slots() {
        // Near the end fewer rows fit, which raises the limit
        let snap = snapshot(ScrollOffsets::new(0, 91));
        assert_eq!(snap.visible_count(Axis::Vertical), 9);
        assert_eq!(scroll_limit(&snap, Axis::Vertical), 92);
    }

    #[test]
    fn zero_wheel_delta_proposes_nothing() {
        let snap = snapshot(ScrollOffsets::default());
        let mut controller = ScrollController::default();
        let gesture = ScrollGesture::Wheel {
            delta_y: 0.0,
            shift: true,
        };
        assert!(controller
            .handle_scroll_intent(gesture, ScrollOffsets::default(), &snap)
            .is_none());
    }

    #[test]
    fn second_drag_start_is_refused() {
        let snap = snapshot(ScrollOffsets::default());
        let mut controller = ScrollController::default();
        let start = |axis| ScrollGesture::DragStart {
            axis,
            point: Point::new(100.0, 100.0),
        };
        controller.handle_scroll_intent(start(Axis::Vertical), ScrollOffsets::default(), &snap);
        controller.handle_scroll_intent(start(Axis::Horizontal), ScrollOffsets::new(2, 0), &snap);
        let session = controller.drag_session().unwrap();
        assert_eq!(session.axis, Axis::Vertical);
        assert_eq!(session.anchor_offset, 0);
    }

    #[test]
    fn drag_move_ignores_only_fully_negative_points() {
        let snap = snapshot(ScrollOffsets::default());
        let mut controller = ScrollController::default();
        let start = ScrollGesture::DragStart {
            axis: Axis::Vertical,
            point: Point::new(416.0, 15.0),
        };
        controller.handle_scroll_intent(start, ScrollOffsets::default(), &snap);
        let closing = ScrollGesture::DragMove {
            point: Point::new(-1.0, -1.0),
        };
        assert!(controller
            .handle_scroll_intent(closing, ScrollOffsets::default(), &snap)
            .is_none());
        // Leaving the canvas sideways still follows the vertical position
        let sideways = ScrollGesture::DragMove {
            point: Point::new(-20.0, 44.6),
        };
        let change = controller
            .handle_scroll_intent(sideways, ScrollOffsets::default(), &snap)
            .unwrap();
        assert_eq!(change.offset, 10);
    }

    #[test]
    fn drag_move_without_session_is_not_classified() {
        let snap = snapshot(ScrollOffsets::default());
        let controller = ScrollController::default();
        let input = PointerInput::new(PointerKind::Drag, Point::new(10.0, 10.0));
        assert!(controller.classify(&input, &snap).is_none());
    }

    #[test]
    fn to_index_clamps_both_ends() {
        assert_eq!(to_index(-3.0, 9), 0);
        assert_eq!(to_index(f64::NAN, 9), 0);
        assert_eq!(to_index(4.7, 9), 4);
        assert_eq!(to_index(42.0, 9), 9);
    }
}
