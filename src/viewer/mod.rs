//! Main CanvasTableView struct - the browser entry point.
//!
//! This module provides the WASM-exported `CanvasTableView` that handles:
//! - Wiring canvas pointer, wheel and drag events to the table
//! - Watching the canvas size with its own `ResizeObserver`
//! - Repainting synchronously after any change that asks for it
//! - Forwarding table notifications to JavaScript listeners
//!
//! JavaScript listeners receive each notification as a plain object
//! (`{type, name, ...}`); returning `false` cancels a cancelable one.
//!
//! Listeners run in the middle of a table update and may call back into the
//! view. `offsetX`/`offsetY` always answer, scroll notifications carry the
//! offsets they commit, and state changes requested from a listener are
//! queued and applied once the running update finishes.

use std::cell::{Cell, RefCell, RefMut};
use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    DragEvent, Event, HtmlCanvasElement, HtmlImageElement, MouseEvent, ResizeObserver,
    ResizeObserverEntry, WheelEvent,
};

use crate::layout::ScrollOffsets;
use crate::model::DataTable;
use crate::render::{CanvasRenderer, RenderBackend};
use crate::table::{CanvasTable, ListenerId, PointerInput, PointerKind};
use crate::types::{EventResponse, Point, TableConfig, TableEvent};

/// DOM events forwarded to the table.
const EVENT_TYPES: [&str; 12] = [
    "click",
    "dblclick",
    "mousedown",
    "mouseup",
    "mousemove",
    "mouseover",
    "mouseout",
    "wheel",
    "dragstart",
    "drag",
    "dragend",
    "dragover",
];

/// Transparent 1x1 GIF used as drag image so thumb drags show no ghost.
const BLANK_DRAG_IMAGE: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

struct SharedState {
    table: CanvasTable,
    renderer: CanvasRenderer,
}

impl SharedState {
    /// Draw a frame if the table asked for one.
    fn repaint(&mut self) {
        if self.table.needs_render() {
            self.table.render(&mut self.renderer);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, width: f64, height: f64) {
        let dpr = web_sys::window().map_or(1.0, |window| window.device_pixel_ratio());
        self.renderer
            .resize(width.max(0.0).round() as u32, height.max(0.0).round() as u32, dpr);
        self.table.resize(width, height);
        tracing::debug!(width, height, dpr, "canvas resized");
        self.repaint();
    }
}

type Deferred = Box<dyn FnOnce(&mut SharedState)>;

/// State shared by the view, its DOM closures and its listeners.
struct Host {
    state: RefCell<SharedState>,
    /// Updates requested while `state` was borrowed
    deferred: RefCell<Vec<Deferred>>,
    /// Offsets readable while `state` is borrowed
    offsets: Rc<Cell<ScrollOffsets>>,
}

impl Host {
    fn new(state: SharedState) -> Self {
        let offsets = Rc::new(Cell::new(state.table.offsets()));
        Self {
            state: RefCell::new(state),
            deferred: RefCell::new(Vec::new()),
            offsets,
        }
    }

    /// Run `op` now, or queue it when a listener re-entered the view.
    ///
    /// Returns `None` when the update was queued. Queued updates run in
    /// order right after the update that is holding the state.
    fn update<R: 'static>(&self, op: impl FnOnce(&mut SharedState) -> R + 'static) -> Option<R> {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            tracing::debug!("view busy, update queued");
            self.deferred.borrow_mut().push(Box::new(move |state: &mut SharedState| {
                op(state);
            }));
            return None;
        };
        let result = op(&mut *state);
        loop {
            let pending = std::mem::take(&mut *self.deferred.borrow_mut());
            if pending.is_empty() {
                break;
            }
            for op in pending {
                op(&mut *state);
            }
        }
        self.offsets.set(state.table.offsets());
        Some(result)
    }

    /// Read the state, failing while a listener runs inside an update.
    fn read<R>(&self, op: impl FnOnce(&SharedState) -> R) -> Result<R, JsValue> {
        self.state.try_borrow().map(|state| op(&*state)).map_err(|_| busy())
    }

    fn state_mut(&self) -> Result<RefMut<'_, SharedState>, JsValue> {
        self.state.try_borrow_mut().map_err(|_| busy())
    }
}

fn busy() -> JsValue {
    JsValue::from_str("canvas-table: not available while a listener is running")
}

/// The main view struct exported to JavaScript
#[wasm_bindgen]
pub struct CanvasTableView {
    host: Rc<Host>,
    canvas: HtmlCanvasElement,
    event_closure: Closure<dyn FnMut(Event)>,
    resize_observer: Option<ResizeObserver>,
    #[allow(dead_code)] // Kept alive while the observer is connected
    resize_closure: Closure<dyn FnMut(Array)>,
}

#[wasm_bindgen]
impl CanvasTableView {
    /// Create a view over `canvas` with an empty table.
    ///
    /// Event handlers and the resize observer are installed immediately.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<CanvasTableView, JsValue> {
        console_error_panic_hook::set_once();

        let mut renderer = CanvasRenderer::new(canvas.clone())?;
        renderer.init()?;
        let host = Rc::new(Host::new(SharedState {
            table: CanvasTable::default(),
            renderer,
        }));

        let drag_image = HtmlImageElement::new().ok();
        if let Some(image) = &drag_image {
            image.set_src(BLANK_DRAG_IMAGE);
        }

        let event_closure = {
            let host = Rc::clone(&host);
            Closure::wrap(Box::new(move |event: Event| {
                Self::handle_event(&host, &event, drag_image.as_ref());
            }) as Box<dyn FnMut(Event)>)
        };
        canvas.set_draggable(true);
        for event_type in EVENT_TYPES {
            canvas
                .add_event_listener_with_callback(
                    event_type,
                    event_closure.as_ref().unchecked_ref(),
                )
                .ok();
        }

        let resize_closure = {
            let host = Rc::clone(&host);
            Closure::wrap(Box::new(move |entries: Array| {
                let Some(entry) = entries
                    .iter()
                    .last()
                    .and_then(|entry| entry.dyn_into::<ResizeObserverEntry>().ok())
                else {
                    return;
                };
                let rect = entry.content_rect();
                let (width, height) = (rect.width(), rect.height());
                host.update(move |state| state.resize(width, height));
            }) as Box<dyn FnMut(Array)>)
        };
        let resize_observer = ResizeObserver::new(resize_closure.as_ref().unchecked_ref()).ok();
        if let Some(observer) = &resize_observer {
            observer.observe(&canvas);
        }

        // Start from the current layout size; the observer reports later changes
        let (width, height) = (canvas.client_width(), canvas.client_height());
        host.update(move |state| state.resize(f64::from(width), f64::from(height)));

        Ok(CanvasTableView {
            host,
            canvas,
            event_closure,
            resize_observer,
            resize_closure,
        })
    }

    /// Replace the table with one parsed from `{"header": [...], "data": [[...]]}`.
    #[wasm_bindgen(js_name = "loadJson")]
    pub fn load_json(&self, json: &str) -> Result<(), JsValue> {
        let data = DataTable::from_json(json)?;
        self.host.update(move |state| {
            state.table.set_model(Box::new(data));
            state.repaint();
        });
        Ok(())
    }

    /// Apply a (partial) configuration object; missing keys take defaults.
    #[wasm_bindgen(js_name = "setConfig")]
    pub fn set_config(&self, config: JsValue) -> Result<(), JsValue> {
        let config: TableConfig = serde_wasm_bindgen::from_value(config)?;
        self.host.update(move |state| {
            state.table.set_config(config);
            state.repaint();
        });
        Ok(())
    }

    #[wasm_bindgen(js_name = "getConfig")]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        let config = self.host.read(|state| state.table.config().clone())?;
        Ok(serde_wasm_bindgen::to_value(&config)?)
    }

    /// Register a notification listener and return its id.
    #[wasm_bindgen(js_name = "addListener")]
    pub fn add_listener(&self, callback: Function) -> Result<u32, JsValue> {
        let offsets = Rc::clone(&self.host.offsets);
        let listener = move |event: &TableEvent| {
            match event {
                TableEvent::Scroll { offsets: committed, .. } => offsets.set(*committed),
                TableEvent::Attach => offsets.set(ScrollOffsets::default()),
                _ => {}
            }
            let payload = event_to_js(event);
            match callback.call1(&JsValue::NULL, &payload) {
                Ok(result) if result.as_bool() == Some(false) => EventResponse::Cancel,
                Ok(_) => EventResponse::Proceed,
                Err(err) => {
                    web_sys::console::error_2(&"canvas-table listener failed:".into(), &err);
                    EventResponse::Proceed
                }
            }
        };
        Ok(self.host.state_mut()?.table.subscribe(listener).get())
    }

    #[wasm_bindgen(js_name = "removeListener")]
    pub fn remove_listener(&self, id: u32) -> Result<bool, JsValue> {
        Ok(self
            .host
            .state_mut()?
            .table
            .unsubscribe(ListenerId::from(id)))
    }

    /// Resize explicitly (CSS pixels), e.g. when the observer is unavailable.
    #[wasm_bindgen]
    pub fn resize(&self, width: f64, height: f64) {
        self.host.update(move |state| state.resize(width, height));
    }

    /// Draw a frame now. Returns false when a listener canceled it, or when
    /// it was requested from a listener and queued.
    #[wasm_bindgen]
    pub fn render(&self) -> bool {
        self.host
            .update(|state| {
                let SharedState { table, renderer } = state;
                table.render(renderer)
            })
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = "offsetX")]
    pub fn offset_x(&self) -> usize {
        self.host.offsets.get().x
    }

    #[wasm_bindgen(getter, js_name = "offsetY")]
    pub fn offset_y(&self) -> usize {
        self.host.offsets.get().y
    }

    /// Jump to the given offsets (clamped); fires no scroll notifications.
    #[wasm_bindgen(js_name = "setOffsets")]
    pub fn set_offsets(&self, x: usize, y: usize) {
        self.host.update(move |state| {
            state.table.set_offsets(ScrollOffsets::new(x, y));
            state.repaint();
        });
    }

    /// Current layout snapshot as a plain object.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        self.host
            .read(|state| serde_wasm_bindgen::to_value(state.table.snapshot()))?
            .map_err(JsValue::from)
    }

    /// Cell (including header and row-label cells) at canvas coordinates.
    #[wasm_bindgen(js_name = "cellAt")]
    pub fn cell_at(&self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        let hit = self.host.read(|state| state.table.locate(Point::new(x, y)))?;
        Ok(serde_wasm_bindgen::to_value(&hit)?)
    }
}

impl CanvasTableView {
    fn handle_event(
        host: &Host,
        event: &Event,
        drag_image: Option<&HtmlImageElement>,
    ) {
        let event_type = event.type_();
        if event_type == "dragover" {
            event.prevent_default();
            return;
        }
        let Some(kind) = PointerKind::from_dom(&event_type) else {
            return;
        };
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let point = Point::new(f64::from(mouse.offset_x()), f64::from(mouse.offset_y()));
        let input = match event.dyn_ref::<WheelEvent>() {
            Some(wheel) => {
                event.prevent_default();
                PointerInput::wheel(point, wheel.delta_y(), wheel.shift_key())
            }
            None => PointerInput {
                shift: mouse.shift_key(),
                ..PointerInput::new(kind, point)
            },
        };
        if kind == PointerKind::DragStart {
            if let Some(transfer) = event.dyn_ref::<DragEvent>().and_then(DragEvent::data_transfer) {
                if let Some(image) = drag_image {
                    transfer.set_drag_image(image, 0, 0);
                }
                transfer.set_drop_effect("none");
                transfer.set_effect_allowed("all");
            }
        }

        host.update(move |state| {
            state.table.handle_pointer(&input);
            state.repaint();
        });
    }
}

impl Drop for CanvasTableView {
    fn drop(&mut self) {
        if let Some(observer) = &self.resize_observer {
            observer.disconnect();
        }
        for event_type in EVENT_TYPES {
            let _ = self.canvas.remove_event_listener_with_callback(
                event_type,
                self.event_closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Serialize a notification and add its DOM-style `name`.
fn event_to_js(event: &TableEvent) -> JsValue {
    let Ok(value) = serde_wasm_bindgen::to_value(event) else {
        return JsValue::NULL;
    };
    let _ = Reflect::set(&value, &"name".into(), &event.name().into());
    value
}
