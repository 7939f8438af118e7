use crate::core::RotationState;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Set once the renderer reports the logo model as loaded; rotation waits for it.
pub static MODEL_READY: AtomicBool = AtomicBool::new(false);

pub struct FrameContext {
    pub rotation: RotationState,
    /// Renderer callback, invoked as `onFrame(angle)` every frame.
    pub on_frame: js_sys::Function,
}

impl FrameContext {
    pub fn new(on_frame: js_sys::Function) -> Self {
        Self {
            rotation: RotationState::default(),
            on_frame,
        }
    }

    pub fn frame(&mut self) {
        if MODEL_READY.load(Ordering::Relaxed) {
            self.rotation = self.rotation.step();
        }
        if let Err(e) = self
            .on_frame
            .call1(&JsValue::NULL, &JsValue::from_f64(self.rotation.angle))
        {
            log::error!("frame callback failed: {:?}", e);
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
