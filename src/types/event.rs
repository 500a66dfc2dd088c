use serde::{Deserialize, Serialize};

use super::{Axis, CellHit};
use crate::layout::ScrollOffsets;

/// What caused a scroll.
///
/// Serialized names match the trigger strings delivered to JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollTrigger {
    ScrollbarBackwardButton,
    ScrollbarForwardButton,
    ScrollbarUpButton,
    ScrollbarDownButton,
    ScrollbarHorizontalTrack,
    ScrollbarVerticalTrack,
    ScrollbarHorizontalThumb,
    ScrollbarVerticalThumb,
    WheelHorizontal,
    WheelVertical,
}

impl ScrollTrigger {
    /// Trigger name as exposed to listeners
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScrollbarBackwardButton => "scrollbarBackwardButton",
            Self::ScrollbarForwardButton => "scrollbarForwardButton",
            Self::ScrollbarUpButton => "scrollbarUpButton",
            Self::ScrollbarDownButton => "scrollbarDownButton",
            Self::ScrollbarHorizontalTrack => "scrollbarHorizontalTrack",
            Self::ScrollbarVerticalTrack => "scrollbarVerticalTrack",
            Self::ScrollbarHorizontalThumb => "scrollbarHorizontalThumb",
            Self::ScrollbarVerticalThumb => "scrollbarVerticalThumb",
            Self::WheelHorizontal => "wheelHorizontal",
            Self::WheelVertical => "wheelVertical",
        }
    }

    /// The axis this trigger scrolls
    pub fn axis(self) -> Axis {
        match self {
            Self::ScrollbarBackwardButton
            | Self::ScrollbarForwardButton
            | Self::ScrollbarHorizontalTrack
            | Self::ScrollbarHorizontalThumb
            | Self::WheelHorizontal => Axis::Horizontal,
            Self::ScrollbarUpButton
            | Self::ScrollbarDownButton
            | Self::ScrollbarVerticalTrack
            | Self::ScrollbarVerticalThumb
            | Self::WheelVertical => Axis::Vertical,
        }
    }
}

/// Per-cell pointer notification kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellEventKind {
    /// Pointer entered the cell
    Over,
    /// Pointer left the cell
    Out,
    Click,
    DoubleClick,
    MouseDown,
    MouseUp,
    MouseMove,
    Wheel,
}

/// Notifications emitted by a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TableEvent {
    /// A frame is about to be drawn; canceling skips the frame.
    BeforeRender,
    /// A frame was drawn.
    Render,
    /// An offset change is about to be committed; canceling keeps the offset.
    /// `offsets` are the ones that would take effect.
    BeforeScroll {
        trigger: ScrollTrigger,
        offsets: ScrollOffsets,
    },
    /// An offset change was committed; `offsets` are the new ones.
    Scroll {
        trigger: ScrollTrigger,
        offsets: ScrollOffsets,
    },
    /// A pointer event resolved to a cell.
    Cell { kind: CellEventKind, hit: CellHit },
    /// The model was attached to a table.
    Attach,
    /// The model was detached from a table.
    Detach,
}

impl TableEvent {
    /// Only the `Before*` notifications honor a cancel response.
    pub fn is_cancelable(&self) -> bool {
        matches!(self, Self::BeforeRender | Self::BeforeScroll { .. })
    }

    /// DOM-style event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::BeforeRender => "table-beforerender",
            Self::Render => "table-render",
            Self::BeforeScroll { .. } => "table-beforescroll",
            Self::Scroll { .. } => "table-scroll",
            Self::Cell { kind, .. } => match kind {
                CellEventKind::Over => "table-mouseover",
                CellEventKind::Out => "table-mouseout",
                CellEventKind::Click => "table-click",
                CellEventKind::DoubleClick => "table-dblclick",
                CellEventKind::MouseDown => "table-mousedown",
                CellEventKind::MouseUp => "table-mouseup",
                CellEventKind::MouseMove => "table-mousemove",
                CellEventKind::Wheel => "table-wheel",
            },
            Self::Attach => "table-attache",
            Self::Detach => "table-detache",
        }
    }
}

/// A listener's answer to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResponse {
    #[default]
    Proceed,
    /// Ignored for notifications that are not cancelable.
    Cancel,
}
