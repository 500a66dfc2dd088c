//! The table: model, configuration, viewport, layout snapshot and input
//! handling in one single-threaded state machine.
//!
//! Every input is handled synchronously through `&mut self`. The layout
//! snapshot is rebuilt whole on every viewport, model, configuration or
//! offset change, so readers never observe a stale or partial snapshot.
//! Painting is left to the host: committed changes raise
//! [`CanvasTable::needs_render`] and the host calls [`CanvasTable::render`].

mod events;
mod scroll;

pub use events::{EventBus, HoverTracker, Listener, ListenerId, PointerInput, PointerKind};
pub use scroll::{scroll_limit, DragSession, ProposedOffsetChange, ScrollController, ScrollGesture};

use crate::layout::{self, compute_layout, LayoutInput, LayoutSnapshot, ScrollOffsets, Viewport};
use crate::model::{DataTable, TableModel};
use crate::render::{render_frame, RenderBackend};
use crate::types::{CellHit, EventResponse, Point, TableConfig, TableEvent};

/// A virtualized grid bound to one model.
pub struct CanvasTable {
    model: Box<dyn TableModel>,
    config: TableConfig,
    viewport: Viewport,
    snapshot: LayoutSnapshot,
    scroll: ScrollController,
    hover: HoverTracker,
    bus: EventBus,
    needs_render: bool,
}

impl Default for CanvasTable {
    fn default() -> Self {
        Self::new(Box::new(DataTable::default()), TableConfig::default())
    }
}

impl CanvasTable {
    pub fn new(model: Box<dyn TableModel>, config: TableConfig) -> Self {
        let mut table = Self {
            model,
            config,
            viewport: Viewport::default(),
            snapshot: LayoutSnapshot::default(),
            scroll: ScrollController::default(),
            hover: HoverTracker::default(),
            bus: EventBus::default(),
            needs_render: true,
        };
        table.relayout();
        table
    }

    pub fn model(&self) -> &dyn TableModel {
        self.model.as_ref()
    }

    /// Swap the model. Offsets, hover and any drag session reset; listeners
    /// see `Detach` for the old model and `Attach` for the new one.
    pub fn set_model(&mut self, model: Box<dyn TableModel>) {
        self.bus.dispatch(&TableEvent::Detach);
        self.model = model;
        self.viewport.offsets = ScrollOffsets::default();
        self.hover.reset();
        self.scroll.cancel_drag();
        self.relayout();
        tracing::debug!(
            columns = self.model.column_count(),
            rows = self.model.row_count(),
            "model attached"
        );
        self.bus.dispatch(&TableEvent::Attach);
        self.needs_render = true;
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TableConfig) {
        self.config = config;
        self.relayout();
        self.needs_render = true;
    }

    /// New hosting surface size in CSS pixels.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
        self.relayout();
        self.needs_render = true;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn offsets(&self) -> ScrollOffsets {
        self.viewport.offsets
    }

    /// Move to `offsets` directly, clamped to the grid. No scroll
    /// notifications fire.
    pub fn set_offsets(&mut self, offsets: ScrollOffsets) {
        self.viewport.offsets = offsets;
        self.relayout();
        self.needs_render = true;
    }

    /// The layout the next frame will draw.
    pub fn snapshot(&self) -> &LayoutSnapshot {
        &self.snapshot
    }

    pub fn hovered(&self) -> Option<&CellHit> {
        self.hover.current()
    }

    pub fn is_dragging(&self) -> bool {
        self.scroll.drag_session().is_some()
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Register a listener. Listeners must not call back into this table.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&TableEvent) -> EventResponse + 'static,
    {
        self.bus.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Body cell under `point`.
    pub fn find_cell_at_point(&self, point: Point) -> Option<CellHit> {
        layout::find_cell_at_point(point, &self.snapshot)
    }

    /// Body, header, row-label or corner cell under `point`.
    pub fn locate(&self, point: Point) -> Option<CellHit> {
        layout::locate(point, &self.snapshot)
    }

    /// Handle one pointer input. Returns true when a repaint is pending.
    pub fn handle_pointer(&mut self, input: &PointerInput) -> bool {
        let mut consumed = false;
        if let Some(gesture) = self.scroll.classify(input, &self.snapshot) {
            consumed = gesture.consumes_input();
            let offsets = self.viewport.offsets;
            if let Some(change) = self.scroll.handle_scroll_intent(gesture, offsets, &self.snapshot) {
                self.commit_scroll(change);
            }
        }
        if !consumed {
            self.dispatch_cell_events(input);
        }
        self.needs_render
    }

    /// Offer `change` to listeners and apply it unless canceled.
    ///
    /// The proposed offset is clamped to the grid first; a proposal that
    /// lands on the current offset fires nothing. Returns true when the
    /// offset changed.
    pub fn commit_scroll(&mut self, change: ProposedOffsetChange) -> bool {
        let axis = change.axis;
        let current = self.viewport.offsets.get(axis);
        let offset = change.offset.min(self.snapshot.count(axis).saturating_sub(1));
        if offset == current {
            return false;
        }
        let trigger = change.trigger;
        let mut proposed = self.viewport.offsets;
        proposed.set(axis, offset);
        if !self.bus.dispatch(&TableEvent::BeforeScroll {
            trigger,
            offsets: proposed,
        }) {
            tracing::debug!(trigger = trigger.as_str(), "scroll canceled");
            return false;
        }
        self.viewport.offsets = proposed;
        self.relayout();
        tracing::debug!(trigger = trigger.as_str(), from = current, to = offset, "scroll committed");
        self.bus.dispatch(&TableEvent::Scroll {
            trigger,
            offsets: self.viewport.offsets,
        });
        self.needs_render = true;
        true
    }

    /// Draw the current snapshot unless a listener cancels `BeforeRender`.
    ///
    /// Returns true when a frame was drawn.
    pub fn render<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) -> bool {
        if !self.bus.dispatch(&TableEvent::BeforeRender) {
            return false;
        }
        render_frame(backend, self.model.as_ref(), &self.snapshot, &self.config);
        self.needs_render = false;
        self.bus.dispatch(&TableEvent::Render);
        true
    }

    fn dispatch_cell_events(&mut self, input: &PointerInput) {
        if input.kind == PointerKind::MouseOver {
            self.hover.reset();
        }
        let cell = match input.kind {
            PointerKind::MouseOut => None,
            _ => self.locate(input.point),
        };
        for event in self.hover.update(cell) {
            self.bus.dispatch(&event);
        }
        if let (Some(kind), Some(hit)) = (input.kind.cell_event(), cell) {
            self.bus.dispatch(&TableEvent::Cell { kind, hit });
        }
    }

    fn relayout(&mut self) {
        let columns = self.model.column_count();
        let rows = self.model.row_count();
        self.viewport.clamp_offsets(columns, rows);
        let content = self.viewport.content_rect(&self.config, self.model.as_ref());
        let input = LayoutInput::new(content, self.viewport.offsets, columns, rows, &self.config);
        self.snapshot = compute_layout(&input, self.model.as_ref());
    }
}

impl std::fmt::Debug for CanvasTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTable")
            .field("columns", &self.model.column_count())
            .field("rows", &self.model.row_count())
            .field("config", &self.config)
            .field("viewport", &self.viewport)
            .field("bus", &self.bus)
            .field("needs_render", &self.needs_render)
            .finish_non_exhaustive()
    }
}
