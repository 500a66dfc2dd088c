//! Pointer input, hover tracking and the notification bus.

use crate::types::{CellEventKind, CellHit, EventResponse, Point, TableEvent};

/// Raw pointer input kinds forwarded by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Click,
    DoubleClick,
    MouseDown,
    MouseUp,
    MouseMove,
    MouseOver,
    MouseOut,
    Wheel,
    DragStart,
    Drag,
    DragEnd,
}

impl PointerKind {
    /// Map a DOM event type name.
    pub fn from_dom(event_type: &str) -> Option<Self> {
        Some(match event_type {
            "click" => Self::Click,
            "dblclick" => Self::DoubleClick,
            "mousedown" => Self::MouseDown,
            "mouseup" => Self::MouseUp,
            "mousemove" => Self::MouseMove,
            "mouseover" => Self::MouseOver,
            "mouseout" => Self::MouseOut,
            "wheel" => Self::Wheel,
            "dragstart" => Self::DragStart,
            "drag" => Self::Drag,
            "dragend" => Self::DragEnd,
            _ => return None,
        })
    }

    /// Cell notification emitted for this input once it resolves to a cell.
    /// Hover and drag kinds have none.
    pub fn cell_event(self) -> Option<CellEventKind> {
        match self {
            Self::Click => Some(CellEventKind::Click),
            Self::DoubleClick => Some(CellEventKind::DoubleClick),
            Self::MouseDown => Some(CellEventKind::MouseDown),
            Self::MouseUp => Some(CellEventKind::MouseUp),
            Self::MouseMove => Some(CellEventKind::MouseMove),
            Self::Wheel => Some(CellEventKind::Wheel),
            Self::MouseOver | Self::MouseOut | Self::DragStart | Self::Drag | Self::DragEnd => None,
        }
    }
}

/// One pointer input in canvas CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub point: Point,
    /// Shift modifier; turns vertical wheel input horizontal
    pub shift: bool,
    /// Wheel delta; only the sign is used
    pub delta_y: f64,
}

impl PointerInput {
    pub fn new(kind: PointerKind, point: Point) -> Self {
        Self {
            kind,
            point,
            shift: false,
            delta_y: 0.0,
        }
    }

    pub fn wheel(point: Point, delta_y: f64, shift: bool) -> Self {
        Self {
            kind: PointerKind::Wheel,
            point,
            shift,
            delta_y,
        }
    }
}

/// Remembers the hovered cell and reports enter/leave transitions.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    current: Option<CellHit>,
}

impl HoverTracker {
    pub fn current(&self) -> Option<&CellHit> {
        self.current.as_ref()
    }

    /// Forget the hovered cell without emitting anything.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Move the hover to `cell`.
    ///
    /// Returns `Out(old)` then `Over(new)` when the address changed, each
    /// only if that side exists. Same address means no notifications.
    pub fn update(&mut self, cell: Option<CellHit>) -> Vec<TableEvent> {
        let old_address = self.current.as_ref().map(|hit| hit.address);
        let new_address = cell.as_ref().map(|hit| hit.address);
        if old_address == new_address {
            return Vec::new();
        }
        tracing::trace!(from = ?old_address, to = ?new_address, "hover moved");
        let old = std::mem::replace(&mut self.current, cell);
        old.map(|hit| TableEvent::Cell {
            kind: CellEventKind::Out,
            hit,
        })
        .into_iter()
        .chain(cell.map(|hit| TableEvent::Cell {
            kind: CellEventKind::Over,
            hit,
        }))
        .collect()
    }
}

/// A notification subscriber.
pub type Listener = Box<dyn FnMut(&TableEvent) -> EventResponse>;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

impl ListenerId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ListenerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Ordered list of listeners. Every listener sees every notification.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u32,
}

impl EventBus {
    pub fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to all listeners in subscription order.
    ///
    /// Returns false only when the event is cancelable and at least one
    /// listener canceled it.
    pub fn dispatch(&mut self, event: &TableEvent) -> bool {
        let mut canceled = false;
        for (_, listener) in &mut self.listeners {
            if listener(event) == EventResponse::Cancel && event.is_cancelable() {
                canceled = true;
            }
        }
        if canceled {
            tracing::debug!(event = event.name(), "event canceled");
        }
        !canceled
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
