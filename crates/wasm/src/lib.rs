mod canvas;
mod logger;
mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use pixplat_core::{Params, Session, Surface};

use crate::canvas::CanvasSurface;

type KeyHandler = Closure<dyn FnMut(KeyboardEvent)>;

struct Host {
    session: Session,
    canvas_id: String,
    on_frame: Option<Closure<dyn FnMut()>>,
    on_key_down: Option<KeyHandler>,
    on_key_up: Option<KeyHandler>,
}

/// A mounted platformer. Dropping it (or calling `unmount`) stops the loop
/// and detaches the key listeners.
#[wasm_bindgen]
pub struct Game {
    host: Rc<RefCell<Host>>,
}

#[wasm_bindgen]
impl Game {
    /// Mounts a fresh simulation drawing into the canvas with id
    /// `canvas_id`. `params_json` overrides individual `Params` fields.
    pub fn mount(canvas_id: &str, params_json: Option<String>) -> Result<Game, JsValue> {
        console_error_panic_hook::set_once();
        logger::init(log::LevelFilter::Info);

        let window = web_sys::window().ok_or_else(|| js_error("no global window"))?;
        let params = match params_json {
            Some(json) => Params::from_json(&json).map_err(|e| js_error(&e.to_string()))?,
            None => Params::default(),
        };
        let palette = theme::read_palette(&window);
        let session = Session::mount(params, palette).map_err(|e| js_error(&e.to_string()))?;

        let host = Rc::new(RefCell::new(Host {
            session,
            canvas_id: canvas_id.to_owned(),
            on_frame: None,
            on_key_down: None,
            on_key_up: None,
        }));

        let on_key_down = {
            let weak = Rc::downgrade(&host);
            KeyHandler::new(move |evt: KeyboardEvent| {
                if let Some(host) = weak.upgrade() {
                    host.borrow_mut().session.key_down(&evt.key());
                }
            })
        };
        let on_key_up = {
            let weak = Rc::downgrade(&host);
            KeyHandler::new(move |evt: KeyboardEvent| {
                if let Some(host) = weak.upgrade() {
                    host.borrow_mut().session.key_up(&evt.key());
                }
            })
        };
        let on_frame = {
            let weak = Rc::downgrade(&host);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(host) = weak.upgrade() {
                    run_frame(&host);
                }
            })
        };

        {
            let mut h = host.borrow_mut();
            h.on_key_down = Some(on_key_down);
            h.on_key_up = Some(on_key_up);
            h.on_frame = Some(on_frame);
        }
        if let Err(e) = start(&window, &host) {
            teardown(&host);
            return Err(e);
        }

        Ok(Game { host })
    }

    /// Cancels the pending frame and removes the key listeners. Idempotent.
    pub fn unmount(&mut self) {
        teardown(&self.host);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.host.borrow().session.is_running()
    }

    /// Snapshot of the player body as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let h = self.host.borrow();
        let b = h.session.sim().body();

        let obj = Object::new();
        Reflect::set(&obj, &"x".into(), &JsValue::from_f64(b.x as f64))?;
        Reflect::set(&obj, &"y".into(), &JsValue::from_f64(b.y as f64))?;
        Reflect::set(&obj, &"vx".into(), &JsValue::from_f64(b.vx as f64))?;
        Reflect::set(&obj, &"vy".into(), &JsValue::from_f64(b.vy as f64))?;
        Reflect::set(&obj, &"onGround".into(), &JsValue::from_bool(b.on_ground))?;
        Reflect::set(&obj, &"isJumping".into(), &JsValue::from_bool(b.is_jumping))?;
        Reflect::set(&obj, &"frames".into(), &JsValue::from_f64(h.session.frames() as f64))?;

        Ok(JsValue::from(obj))
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        teardown(&self.host);
    }
}

fn js_error(msg: &str) -> JsValue {
    js_sys::Error::new(msg).into()
}

fn start(window: &Window, host: &RefCell<Host>) -> Result<(), JsValue> {
    let mut h = host.borrow_mut();
    for (event, handler) in [("keydown", &h.on_key_down), ("keyup", &h.on_key_up)] {
        if let Some(handler) = handler {
            window.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
        }
    }
    schedule(window, &mut h)
}

/// Requests the next frame. Only called once the current frame has drawn.
fn schedule(window: &Window, host: &mut Host) -> Result<(), JsValue> {
    let Some(cb) = host.on_frame.as_ref() else {
        return Ok(());
    };
    let handle = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    host.session.set_pending(handle);
    Ok(())
}

fn run_frame(host: &RefCell<Host>) {
    let mut h = host.borrow_mut();
    let mut surface = CanvasSurface::find(&h.canvas_id);
    h.session.frame(surface.as_mut().map(|s| s as &mut dyn Surface));

    if !h.session.is_running() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = schedule(&window, &mut h) {
        log::warn!("requestAnimationFrame failed, loop stopped: {e:?}");
    }
}

fn teardown(host: &RefCell<Host>) {
    let mut h = host.borrow_mut();
    let pending = h.session.unmount();
    let on_key_down = h.on_key_down.take();
    let on_key_up = h.on_key_up.take();
    h.on_frame = None;
    drop(h);

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(handle) = pending {
        if let Err(e) = window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {e:?}");
        }
    }
    for (event, handler) in [("keydown", on_key_down), ("keyup", on_key_up)] {
        let Some(handler) = handler else { continue };
        if let Err(e) =
            window.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {event} listener: {e:?}");
        }
    }
}
