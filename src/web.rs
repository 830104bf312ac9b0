//! Browser binding.
//!
//! [`GeoPickApp`] owns the demo scene, the pick controller, and the input
//! processor for one canvas. Canvas mouse and touch events feed the input
//! processor; completed clicks and taps run a pick cycle. The modal is a DOM
//! element whose `display` style is toggled, dismissed by one persistent
//! listener on its close control and one on the window.
//!
//! The host renders the globe itself. It passes a redraw callback, which is
//! invoked after the session borrow is released, and reads placemark state
//! back through [`GeoPickApp::placemarks_json`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlCanvasElement, HtmlElement,
    MouseEvent, Node, TouchEvent,
};

use crate::camera::Viewport;
use crate::controller::{DismissalRouter, PickController};
use crate::demo;
use crate::error::GeoPickError;
use crate::geo::Location;
use crate::input::{
    InputEvent, InputProcessor, MouseButton, PointerSource, TouchPhase,
};
use crate::modal::{ClickTarget, ModalSurface};
use crate::options::Options;
use crate::picking::PickScene;
use crate::scene::{Placemark, PlacemarkId, Scene};

/// Selector of the close control inside the modal.
const CLOSE_SELECTOR: &str = ".close";

impl From<GeoPickError> for JsValue {
    fn from(e: GeoPickError) -> Self {
        Self::from_str(&e.to_string())
    }
}

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

// ── Modal element ────────────────────────────────────────────────────────

/// Modal surface backed by a DOM element.
pub struct DomModal {
    element: HtmlElement,
}

impl ModalSurface for DomModal {
    fn set_visible(&mut self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.element.style().set_property("display", display) {
            log::warn!("failed to set modal display: {e:?}");
        }
    }
}

// ── Session ──────────────────────────────────────────────────────────────

/// Everything one canvas needs between events.
struct Session {
    scene: Scene,
    controller: PickController<DomModal>,
    input: InputProcessor,
    canvas: HtmlCanvasElement,
    modal: HtmlElement,
    dismissal: DismissalRouter,
    attached: bool,
}

impl Session {
    /// Mirror the canvas' client rectangle into the scene viewport.
    fn sync_viewport(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.scene.set_viewport(Viewport {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        });
    }

    /// Feed one raw event through the input processor and run a pick cycle
    /// when it completes a click or tap. Returns the source of the pick.
    fn handle_input(&mut self, event: InputEvent) -> Option<PointerSource> {
        let pointer = self.input.handle_event(event)?;
        self.sync_viewport();
        let outcome = self.controller.handle_pick(&mut self.scene, pointer);
        self.dismissal.note_pick(pointer.source, &outcome);
        Some(pointer.source)
    }

    fn handle_mouse(&mut self, event: &MouseEvent, pressed: Option<bool>) {
        let _ = self.handle_input(InputEvent::CursorMoved {
            x: f64::from(event.client_x()),
            y: f64::from(event.client_y()),
        });
        if let Some(pressed) = pressed {
            let _ = self.handle_input(InputEvent::MouseButton {
                button: MouseButton::from_dom(event.button()),
                pressed,
            });
        }
    }

    /// Returns `true` if any changed touch completed a tap.
    fn handle_touch(&mut self, event: &TouchEvent, phase: TouchPhase) -> bool {
        let touches = event.changed_touches();
        let mut tapped = false;
        for touch in (0..touches.length()).filter_map(|i| touches.get(i)) {
            let input = InputEvent::Touch {
                phase,
                id: u64::from(touch.identifier().unsigned_abs()),
                x: f64::from(touch.client_x()),
                y: f64::from(touch.client_y()),
            };
            tapped |= self.handle_input(input).is_some();
        }
        tapped
    }

    /// Where a page click landed relative to the modal.
    fn classify(&self, target: Option<EventTarget>) -> ClickTarget {
        let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return ClickTarget::Outside;
        };
        let modal: &Node = &self.modal;
        let node: &Node = &element;
        let inside_modal = modal.contains(Some(node));
        let on_close = matches!(element.closest(CLOSE_SELECTOR), Ok(Some(_)));
        ClickTarget::from_hit(inside_modal, on_close)
    }

    fn handle_page_click(&mut self, event: &Event) {
        let target = self.classify(event.target());
        let _ = self.dismissal.route_click(&mut self.controller, target);
    }
}

// ── Shared handle ────────────────────────────────────────────────────────

/// Session handle shared by the app and every event listener.
#[derive(Clone)]
struct Shared {
    session: Rc<RefCell<Session>>,
    redraw_pending: Rc<Cell<bool>>,
    redraw: js_sys::Function,
}

impl Shared {
    /// Run `f` on the session, then invoke the host redraw callback if the
    /// scene asked for one.
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let result = match self.session.try_borrow_mut() {
            Ok(mut session) => Some(f(&mut session)),
            Err(_) => {
                log::warn!("event dropped: session is busy");
                None
            }
        };
        if self.redraw_pending.replace(false) {
            if let Err(e) = self.redraw.call0(&JsValue::NULL) {
                log::warn!("redraw callback failed: {e:?}");
            }
        }
        result
    }

    /// Register a listener that lives as long as the page.
    fn listen(
        &self,
        target: &EventTarget,
        kind: &str,
        handler: impl Fn(&mut Session, &Event) + 'static,
    ) -> Result<(), GeoPickError> {
        let shared = self.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let _ = shared.with_session(|session| handler(session, &event));
        });
        target
            .add_event_listener_with_callback(
                kind,
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|e| {
                GeoPickError::Dom(format!("failed to add {kind} listener: {e:?}"))
            })?;
        closure.forget();
        Ok(())
    }
}

// ── DOM lookups ──────────────────────────────────────────────────────────

fn document() -> Result<Document, GeoPickError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| GeoPickError::Dom("no document".to_owned()))
}

fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
) -> Result<T, GeoPickError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GeoPickError::Dom(format!("no element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| GeoPickError::Dom(format!("#{id} has the wrong type")))
}

fn mouse_handler(
    pressed: Option<bool>,
) -> impl Fn(&mut Session, &Event) + 'static {
    move |session, event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            session.handle_mouse(event, pressed);
        }
    }
}

fn touch_handler(phase: TouchPhase) -> impl Fn(&mut Session, &Event) + 'static {
    move |session, event| {
        let Some(touch) = event.dyn_ref::<TouchEvent>() else {
            return;
        };
        // A completed tap must not also produce emulated mouse events.
        if session.handle_touch(touch, phase) && phase == TouchPhase::Ended {
            event.prevent_default();
        }
    }
}

// ── Exports ──────────────────────────────────────────────────────────────

/// Placemark state handed to the host renderer.
#[derive(Serialize)]
struct PlacemarkView<'a> {
    id: PlacemarkId,
    #[serde(flatten)]
    placemark: &'a Placemark,
    /// Canvas position, absent when behind the globe.
    screen: Option<[f64; 2]>,
}

/// Pick-and-highlight session bound to a canvas and a modal element.
#[wasm_bindgen]
pub struct GeoPickApp {
    shared: Shared,
}

#[wasm_bindgen]
impl GeoPickApp {
    /// Build the demo scene for `canvas_id`, driving the modal
    /// `modal_id`. `options_json` may be empty for defaults. `redraw` is
    /// called with no arguments whenever the scene needs repainting.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        modal_id: &str,
        options_json: &str,
        redraw: js_sys::Function,
    ) -> Result<GeoPickApp, JsValue> {
        let options = if options_json.trim().is_empty() {
            Options::default()
        } else {
            Options::from_json(options_json)?
        };
        let document = document()?;
        let canvas: HtmlCanvasElement = element_by_id(&document, canvas_id)?;
        let modal: HtmlElement = element_by_id(&document, modal_id)?;

        let redraw_pending = Rc::new(Cell::new(false));
        let mut scene = demo::build_scene(&options, Viewport::default());
        let pending = Rc::clone(&redraw_pending);
        scene.set_redraw_hook(Box::new(move || pending.set(true)));

        let mut session = Session {
            scene,
            controller: PickController::new(
                options.modal_trigger(),
                DomModal {
                    element: modal.clone(),
                },
            ),
            input: InputProcessor::with_options(&options.input),
            canvas,
            modal,
            dismissal: DismissalRouter::new(),
            attached: false,
        };
        session.sync_viewport();

        Ok(Self {
            shared: Shared {
                session: Rc::new(RefCell::new(session)),
                redraw_pending,
                redraw,
            },
        })
    }

    /// Register the canvas, close-control, and window listeners. Calling
    /// it again is a no-op.
    pub fn attach(&self) -> Result<(), JsValue> {
        let (canvas, modal) = {
            let mut session = self.shared.session.borrow_mut();
            if session.attached {
                return Ok(());
            }
            session.attached = true;
            (session.canvas.clone(), session.modal.clone())
        };
        let shared = &self.shared;

        shared.listen(&canvas, "mousedown", mouse_handler(Some(true)))?;
        shared.listen(&canvas, "mousemove", mouse_handler(None))?;
        shared.listen(&canvas, "mouseup", mouse_handler(Some(false)))?;
        shared.listen(&canvas, "touchstart", touch_handler(TouchPhase::Started))?;
        shared.listen(&canvas, "touchmove", touch_handler(TouchPhase::Moved))?;
        shared.listen(&canvas, "touchend", touch_handler(TouchPhase::Ended))?;
        shared.listen(
            &canvas,
            "touchcancel",
            touch_handler(TouchPhase::Cancelled),
        )?;

        match modal.query_selector(CLOSE_SELECTOR) {
            Ok(Some(close)) => shared.listen(&close, "click", |session, _| {
                let _ = session
                    .dismissal
                    .route_click(&mut session.controller, ClickTarget::CloseControl);
            })?,
            _ => log::warn!("modal has no {CLOSE_SELECTOR} control"),
        }

        let window = web_sys::window()
            .ok_or_else(|| GeoPickError::Dom("no window".to_owned()))?;
        shared.listen(&window, "click", |session, event| {
            session.handle_page_click(event);
        })?;
        log::info!("listeners attached");
        Ok(())
    }

    /// Move the camera to look at a location from `range` meters.
    #[wasm_bindgen(js_name = setView)]
    pub fn set_view(&self, latitude: f64, longitude: f64, range: f64) {
        let _ = self.shared.with_session(|session| {
            let camera = session.scene.camera_mut();
            camera.look_at = Location::new(latitude, longitude);
            camera.range = range;
            session.scene.redraw();
        });
    }

    /// Every placemark with its attributes, highlight flag, and canvas
    /// position, as a JSON array.
    #[wasm_bindgen(js_name = placemarksJson)]
    pub fn placemarks_json(&self) -> Result<String, JsValue> {
        let json = self.shared.with_session(|session| {
            let views: Vec<_> = session
                .scene
                .placemarks()
                .map(|(id, placemark)| PlacemarkView {
                    id,
                    placemark,
                    screen: session
                        .scene
                        .screen_point(placemark)
                        .map(|p| [p.x, p.y]),
                })
                .collect();
            serde_json::to_string(&views)
        });
        match json {
            Some(Ok(json)) => Ok(json),
            Some(Err(e)) => Err(JsValue::from_str(&e.to_string())),
            None => Err(JsValue::from_str("session is busy")),
        }
    }

    /// Highlighted placemark ids as a JSON array of `{layer, index}`.
    #[wasm_bindgen(js_name = highlightedJson)]
    #[must_use]
    pub fn highlighted_json(&self) -> String {
        self.shared
            .with_session(|session| {
                serde_json::to_string(session.controller.highlighted())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    /// Whether the modal is displayed.
    #[wasm_bindgen(js_name = modalShown)]
    #[must_use]
    pub fn modal_shown(&self) -> bool {
        self.shared
            .with_session(|session| session.controller.modal().is_shown())
            .unwrap_or(false)
    }

    /// JSON Schema of the options accepted by the constructor.
    #[wasm_bindgen(js_name = optionsSchema)]
    #[must_use]
    pub fn options_schema() -> String {
        serde_json::to_string(&Options::json_schema()).unwrap_or_default()
    }
}
