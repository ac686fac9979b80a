// Browser shell: wires the particle field, the cursor trail, and the frame
// loop to a canvas element, viewport resize events, and
// requestAnimationFrame.

use crate::config::{FieldConfig, TrailConfig};
use crate::field::ParticleField;
use crate::frame::FrameHandle;
use crate::surface::CanvasSurface;
use crate::trail::CursorTrail;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

struct AppState {
    field: RefCell<ParticleField>,
    trail: RefCell<CursorTrail>,
    surface: RefCell<CanvasSurface>,
    frame: RefCell<FrameHandle>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl AppState {
    fn attach(canvas_id: &str) -> Option<Rc<AppState>> {
        let document = web_sys::window()?.document()?;
        let canvas = document
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Rc::new(AppState {
            field: RefCell::new(ParticleField::new(FieldConfig::default())),
            trail: RefCell::new(CursorTrail::new(TrailConfig::default())),
            surface: RefCell::new(CanvasSurface::new(canvas, context)),
            frame: RefCell::new(FrameHandle::new()),
            tick: RefCell::new(None),
        }))
    }
}

/// The background animator as exposed to the hosting page. Construction
/// looks up the canvas by id; a page without one (or whose canvas cannot
/// produce a 2d context) gets an inert instance that ignores every call.
#[wasm_bindgen]
pub struct ParticleBackground {
    state: Option<Rc<AppState>>,
    _resize: Option<Closure<dyn FnMut()>>,
    _mousemove: Option<Closure<dyn FnMut(MouseEvent)>>,
}

#[wasm_bindgen]
impl ParticleBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> ParticleBackground {
        let state = match AppState::attach(canvas_id) {
            Some(state) => state,
            None => {
                warn!(canvas_id, "canvas missing or without a 2d context; background disabled");
                return ParticleBackground {
                    state: None,
                    _resize: None,
                    _mousemove: None,
                };
            }
        };

        let resize_state = Rc::clone(&state);
        let resize = Closure::wrap(Box::new(move || {
            start(&resize_state);
        }) as Box<dyn FnMut()>);

        let mousemove_state = Rc::clone(&state);
        let mousemove = Closure::wrap(Box::new(move |event: MouseEvent| {
            // Only collect trail dots while a running loop drains them.
            if mousemove_state.frame.borrow().is_scheduled() {
                mousemove_state
                    .trail
                    .borrow_mut()
                    .spawn(event.client_x() as f64, event.client_y() as f64);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
            let _ = window
                .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
        }

        ParticleBackground {
            state: Some(state),
            _resize: Some(resize),
            _mousemove: Some(mousemove),
        }
    }

    /// Sizes the surface to the viewport, rebuilds the particle set, and
    /// (re)schedules the frame loop. Safe to call repeatedly: the pending
    /// frame callback is cancelled before a new one is scheduled.
    pub fn start(&self) {
        if let Some(state) = &self.state {
            start(state);
        }
    }
}

fn start(state: &Rc<AppState>) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    if prefers_reduced_motion(&window) {
        info!("reduced motion requested; leaving the background static");
        if let Some(handle) = state.frame.borrow_mut().clear() {
            let _ = window.cancel_animation_frame(handle);
        }
        return;
    }

    let width = viewport_dimension(window.inner_width());
    let height = viewport_dimension(window.inner_height());

    state.surface.borrow_mut().set_size(width, height);
    {
        let mut field = state.field.borrow_mut();
        field.resize(width, height);
        field.rebuild_particles(&mut rand::thread_rng());
    }
    info!(width, height, "particle field rebuilt");

    ensure_tick(state);
    let tick = state.tick.borrow();
    if let Some(closure) = tick.as_ref() {
        state.frame.borrow_mut().restart(
            |handle| {
                let _ = window.cancel_animation_frame(handle);
            },
            || {
                window
                    .request_animation_frame(closure.as_ref().unchecked_ref())
                    .expect("requestAnimationFrame failed")
            },
        );
    }
}

// The tick closure is created once and reused across restarts; resize
// events only cancel and reschedule it.
fn ensure_tick(state: &Rc<AppState>) {
    if state.tick.borrow().is_some() {
        return;
    }
    let tick_state = Rc::clone(state);
    let closure = Closure::wrap(Box::new(move || {
        tick(&tick_state);
    }) as Box<dyn FnMut()>);
    *state.tick.borrow_mut() = Some(closure);
}

// One frame: draw the current state, then step it, then reschedule.
fn tick(state: &Rc<AppState>) {
    {
        let mut surface = state.surface.borrow_mut();
        let surface: &mut CanvasSurface = &mut surface;
        state.field.borrow().render(surface);
        state.trail.borrow().render(surface);
    }
    state.field.borrow_mut().advance();
    state.trail.borrow_mut().advance();

    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let tick = state.tick.borrow();
    if let Some(closure) = tick.as_ref() {
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => state.frame.borrow_mut().store(handle),
            Err(err) => warn!(?err, "failed to schedule the next frame"),
        }
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn viewport_dimension(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}
