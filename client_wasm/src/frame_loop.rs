//! requestAnimationFrame driver

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tennis_core::Params;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `on_frame(dt)` once per animation frame until stopped or dropped
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f32) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next_handle = handle.clone();
        let next_callback = Rc::downgrade(&callback);
        let last_time: Cell<Option<f64>> = Cell::new(None);
        let closure = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            let dt = match last_time.get() {
                Some(prev) => ((time - prev) / 1000.0) as f32,
                None => Params::FIXED_DT,
            };
            last_time.set(Some(time));
            on_frame(dt);

            // Stopped while this frame was running
            if next_handle.get().is_none() {
                return;
            }
            let Some(callback) = next_callback.upgrade() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                next_handle.set(None);
                return;
            };
            let request = match callback.borrow().as_ref() {
                Some(closure) => window.request_animation_frame(closure.as_ref().unchecked_ref()),
                None => return,
            };
            match request {
                Ok(id) => next_handle.set(Some(id)),
                Err(e) => {
                    web_sys::console::error_2(&"requestAnimationFrame failed".into(), &e);
                    next_handle.set(None);
                }
            }
        });

        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        handle.set(Some(id));
        *callback.borrow_mut() = Some(closure);

        Ok(Self { handle, callback })
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Cancel the pending frame. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    web_sys::console::error_2(&"cancelAnimationFrame failed".into(), &e);
                }
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        self.callback.borrow_mut().take();
    }
}
