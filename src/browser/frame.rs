//! Coalesced `requestAnimationFrame` scheduling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::frame::Coalescer;

/// Runs a callback at most once per animation frame, however often
/// [`FrameScheduler::schedule`] is called in between.
pub struct FrameScheduler {
    window: Window,
    gate: Rc<RefCell<Coalescer>>,
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<dyn Fn()>,
    closure: Closure<dyn FnMut(f64)>,
}

impl FrameScheduler {
    pub fn new(window: Window, callback: impl Fn() + 'static) -> Self {
        let gate = Rc::new(RefCell::new(Coalescer::new()));
        let handle = Rc::new(Cell::new(None));
        let callback: Rc<dyn Fn()> = Rc::new(callback);

        let gate_for_cb = Rc::clone(&gate);
        let handle_for_cb = Rc::clone(&handle);
        let callback_for_cb = Rc::clone(&callback);
        let closure = Closure::wrap(Box::new(move |_ts: f64| {
            handle_for_cb.set(None);
            let run = gate_for_cb.borrow_mut().begin_frame();
            if run {
                callback_for_cb();
            }
        }) as Box<dyn FnMut(f64)>);

        Self { window, gate, handle, callback, closure }
    }

    /// Request a frame unless one is already pending.
    ///
    /// If the browser refuses the request the callback runs immediately.
    pub fn schedule(&self) {
        if !self.gate.borrow_mut().request() {
            return;
        }
        match self.window.request_animation_frame(self.closure.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(err) => {
                log::debug!("requestAnimationFrame failed, running inline: {err:?}");
                self.gate.borrow_mut().cancel();
                (self.callback)();
            }
        }
    }

    /// Cancel a pending frame, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::debug!("cancelAnimationFrame failed: {err:?}");
            }
        }
        self.gate.borrow_mut().cancel();
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
