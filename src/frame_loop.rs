// Host scheduling wrappers: a requestAnimationFrame loop that re-registers
// itself after every tick, and a window resize subscription. Both can be
// torn down explicitly.

use crate::error::DotsError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

struct LoopState {
    window: Window,
    pending: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    // The callback holds an Rc back to this state, so the loop keeps itself
    // alive until cancel() takes the closure out
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), DotsError> {
        let slot = self.callback.borrow();
        let callback = match slot.as_ref() {
            Some(callback) => callback,
            None => return Ok(()),
        };
        let handle = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref::<js_sys::Function>())?;
        self.pending.set(Some(handle));
        Ok(())
    }
}

pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    // Runs `tick` once per display frame until cancelled. Dropping the
    // returned handle does not stop the loop.
    pub fn start<F>(window: Window, mut tick: F) -> Result<AnimationLoop, DotsError>
    where
        F: FnMut() + 'static,
    {
        let state = Rc::new(LoopState {
            window,
            pending: Cell::new(None),
            cancelled: Cell::new(false),
            callback: RefCell::new(None),
        });

        let frame_state = state.clone();
        let callback = Closure::wrap(Box::new(move || {
            frame_state.pending.set(None);
            if frame_state.cancelled.get() {
                return;
            }
            tick();
            if let Err(e) = frame_state.schedule() {
                log!("failed to schedule next frame: {}", e);
            }
        }) as Box<dyn FnMut()>);
        *state.callback.borrow_mut() = Some(callback);

        state.schedule()?;
        Ok(AnimationLoop { state })
    }

    pub fn is_running(&self) -> bool {
        !self.state.cancelled.get()
    }

    // Cancels the pending frame and releases the callback. Must not be called
    // from inside the tick itself.
    pub fn cancel(&self) {
        if self.state.cancelled.replace(true) {
            return;
        }
        if let Some(handle) = self.state.pending.take() {
            if let Err(e) = self.state.window.cancel_animation_frame(handle) {
                log!("failed to cancel animation frame: {:?}", e);
            }
        }
        self.state.callback.borrow_mut().take();
    }
}

pub struct ResizeListener {
    window: Window,
    callback: Option<Closure<dyn FnMut()>>,
}

impl ResizeListener {
    pub fn subscribe<F>(window: Window, on_resize: F) -> Result<ResizeListener, DotsError>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
        Ok(ResizeListener {
            window,
            callback: Some(callback),
        })
    }

    pub fn remove(&mut self) {
        if let Some(callback) = self.callback.take() {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                log!("failed to remove resize listener: {:?}", e);
            }
        }
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        self.remove();
    }
}
