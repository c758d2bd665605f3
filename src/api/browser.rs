//! Page wiring: canvas lookup, pointer and resize listeners, animation frames
//!
//! All closures share one `Rc<RefCell<Mounted>>`; the browser event loop is
//! single threaded, so borrows never overlap.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::domain::{SceneConfig, Viewport};
use crate::render::CanvasRenderer;
use crate::session::Session;

type FrameCallback = Closure<dyn FnMut(f64)>;

const POINTER_EVENTS: [&str; 2] = ["mousemove", "mousedown"];

struct Mounted {
    session: Session,
    renderer: CanvasRenderer,
    /// Outstanding `requestAnimationFrame` id while the loop is scheduled
    frame_request: Option<i32>,
    /// Outstanding `setTimeout` id for the debounced resize
    resize_timer: Option<i32>,
}

/// A scene mounted into the page
#[wasm_bindgen]
pub struct AttractorApp {
    state: Rc<RefCell<Mounted>>,
    on_frame: Rc<RefCell<Option<FrameCallback>>>,
    on_pointer: Closure<dyn FnMut(MouseEvent)>,
    on_resize: Closure<dyn FnMut(Event)>,
    _on_resize_settled: Rc<Closure<dyn FnMut()>>,
}

/// Mount the attractor scene into the element matching `selector` and start
/// it. A `<canvas>` target is drawn on directly; any other element gets a
/// canvas appended. Fails if the element does not exist.
#[wasm_bindgen]
pub fn mount(selector: &str, config_json: Option<String>) -> Result<AttractorApp, JsValue> {
    let config = match config_json {
        Some(json) => SceneConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
        None => SceneConfig::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let canvas = resolve_canvas(&document, selector)?;

    let viewport = window_viewport(&window)?;
    let session = Session::new(viewport, config).map_err(|e| JsValue::from_str(&e))?;
    let renderer = CanvasRenderer::new(canvas).map_err(|e| JsValue::from_str(&e))?;
    let options = session.render_options();
    renderer.resize(options.width, options.height);

    let state = Rc::new(RefCell::new(Mounted {
        session,
        renderer,
        frame_request: None,
        resize_timer: None,
    }));

    let on_frame = install_frame_loop(&state);
    let on_pointer = install_pointer(&state)?;
    let (on_resize, on_resize_settled) = install_resize(&window, &state)?;

    let app = AttractorApp {
        state,
        on_frame,
        on_pointer,
        on_resize,
        _on_resize_settled: on_resize_settled,
    };
    app.start()?;
    console_log!("attractor scene mounted on {}", selector);
    Ok(app)
}

#[wasm_bindgen]
impl AttractorApp {
    /// Resume stepping and rendering
    pub fn start(&self) -> Result<(), JsValue> {
        self.state.borrow_mut().session.start();
        self.schedule_frame()
    }

    /// Halt stepping and rendering; bodies stay as they are
    pub fn stop(&self) {
        let mut state = self.state.borrow_mut();
        state.session.stop();
        if let Some(id) = state.frame_request.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.state.borrow().session.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.state.borrow().session.body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.state.borrow().session.viewport().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.state.borrow().session.viewport().height
    }

    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.state.borrow().renderer.canvas().clone()
    }

    fn schedule_frame(&self) -> Result<(), JsValue> {
        request_frame(&self.state, &self.on_frame)
    }
}

impl Drop for AttractorApp {
    fn drop(&mut self) {
        self.stop();
        self.detach_listeners();
        // Break the frame closure's reference cycle
        self.on_frame.borrow_mut().take();
    }
}

impl AttractorApp {
    /// Unregister every DOM callback before its closure is freed
    fn detach_listeners(&self) {
        let mut state = self.state.borrow_mut();
        let canvas = state.renderer.canvas().clone();
        for kind in POINTER_EVENTS {
            let _ = canvas
                .remove_event_listener_with_callback(kind, self.on_pointer.as_ref().unchecked_ref());
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        if let Some(id) = state.resize_timer.take() {
            window.clear_timeout_with_handle(id);
        }
    }
}

fn resolve_canvas(document: &Document, selector: &str) -> Result<HtmlCanvasElement, JsValue> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("no element matches {selector}")))?;

    match element.dyn_into::<HtmlCanvasElement>() {
        Ok(canvas) => Ok(canvas),
        Err(container) => {
            let canvas = document
                .create_element("canvas")?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
            container.append_child(&canvas)?;
            Ok(canvas)
        }
    }
}

fn window_viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok(Viewport::new(width as f32, height as f32))
}

/// Schedule one animation frame unless one is already pending
fn request_frame(
    state: &Rc<RefCell<Mounted>>,
    on_frame: &Rc<RefCell<Option<FrameCallback>>>,
) -> Result<(), JsValue> {
    let mut s = state.borrow_mut();
    if s.frame_request.is_some() || !s.session.is_running() {
        return Ok(());
    }
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let callback = on_frame.borrow();
    let Some(cb) = callback.as_ref() else {
        return Ok(());
    };
    s.frame_request = Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?);
    Ok(())
}

fn install_frame_loop(state: &Rc<RefCell<Mounted>>) -> Rc<RefCell<Option<FrameCallback>>> {
    let on_frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let loop_state = Rc::clone(state);
    let loop_handle = Rc::clone(&on_frame);

    *on_frame.borrow_mut() = Some(Closure::new(move |_now: f64| {
        {
            let mut s = loop_state.borrow_mut();
            s.frame_request = None;
            let Mounted { session, renderer, .. } = &mut *s;
            if let Some(frame) = session.tick() {
                if let Err(e) = renderer.draw(frame) {
                    console_warn!("draw failed: {}", e);
                }
            }
        }
        if let Err(e) = request_frame(&loop_state, &loop_handle) {
            console_warn!("could not schedule next frame: {:?}", e);
        }
    }));

    on_frame
}

fn install_pointer(state: &Rc<RefCell<Mounted>>) -> Result<Closure<dyn FnMut(MouseEvent)>, JsValue> {
    let pointer_state = Rc::clone(state);
    let on_pointer = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        pointer_state
            .borrow_mut()
            .session
            .set_pointer(event.offset_x() as f32, event.offset_y() as f32);
    });

    let canvas = state.borrow().renderer.canvas().clone();
    for kind in POINTER_EVENTS {
        canvas.add_event_listener_with_callback(kind, on_pointer.as_ref().unchecked_ref())?;
    }
    Ok(on_pointer)
}

/// `resize` restarts a single pending timeout; when it fires the session
/// applies the latest size and the canvas backing store follows.
fn install_resize(
    window: &Window,
    state: &Rc<RefCell<Mounted>>,
) -> Result<(Closure<dyn FnMut(Event)>, Rc<Closure<dyn FnMut()>>), JsValue> {
    let settled_state = Rc::clone(state);
    let on_settled = Rc::new(Closure::<dyn FnMut()>::new(move || {
        let mut s = settled_state.borrow_mut();
        s.resize_timer = None;
        let Mounted { session, renderer, .. } = &mut *s;
        if session.flush_resize().is_some() {
            let options = session.render_options();
            renderer.resize(options.width, options.height);
        }
    }));

    let resize_state = Rc::clone(state);
    let settled = Rc::clone(&on_settled);
    let on_resize = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(viewport) = window_viewport(&window) else {
            return;
        };

        let mut s = resize_state.borrow_mut();
        if let Some(id) = s.resize_timer.take() {
            window.clear_timeout_with_handle(id);
        }
        s.session
            .request_resize(js_sys::Date::now(), viewport.width, viewport.height);
        let wait = s.session.resize_wait_ms().ceil() as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            (*settled).as_ref().unchecked_ref(),
            wait,
        ) {
            Ok(id) => s.resize_timer = Some(id),
            Err(e) => console_warn!("could not schedule resize: {:?}", e),
        }
    });

    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    Ok((on_resize, on_settled))
}
