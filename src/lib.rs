// Floating background dots for a web page. A fixed set of small dots drift at
// constant velocity, wrap around the viewport edges, and are scattered again
// whenever the window is resized.

#[macro_use]
mod utils;

pub mod config;
pub mod dom;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod particle;
pub mod surface;
pub mod viewport;

use dom::{DomSurface, WindowViewport};
use error::DotsError;
use field::ParticleField;
use frame_loop::{AnimationLoop, ResizeListener};
use std::cell::RefCell;
use std::rc::Rc;
use utils::Timer;
use viewport::ViewportSource;
use wasm_bindgen::prelude::*;

// Use `wee_alloc` as the global allocator when the feature is enabled
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// Starts the dots in the page's `#dots` container
#[wasm_bindgen]
pub fn run() -> Result<FloatingDots, JsValue> {
    run_in(config::CONTAINER_ID)
}

#[wasm_bindgen]
pub fn run_in(container_id: &str) -> Result<FloatingDots, JsValue> {
    initialize();
    Ok(FloatingDots::start(container_id, config::DOT_COUNT)?)
}

// Handle to a running dot field. Dropping it (or calling `free()` from
// JavaScript) stops the animation just like `cancel()`.
#[wasm_bindgen]
pub struct FloatingDots {
    field: Rc<RefCell<ParticleField<DomSurface>>>,
    animation: AnimationLoop,
    resize: ResizeListener,
}

impl FloatingDots {
    pub fn start(container_id: &str, count: usize) -> Result<FloatingDots, DotsError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let surface = DomSurface::for_container(document, container_id)?;
        let viewport = WindowViewport::new(window.clone());

        let field = {
            let _timer = Timer::new("ParticleField::create");
            ParticleField::create(surface, count, viewport.viewport(), &mut rand::thread_rng())?
        };
        let field = Rc::new(RefCell::new(field));
        log!("created {} dots in #{}", count, container_id);

        let resize_field = field.clone();
        let resize_viewport = WindowViewport::new(window.clone());
        let resize = ResizeListener::subscribe(window.clone(), move || {
            resize_field
                .borrow_mut()
                .on_resize(resize_viewport.viewport(), &mut rand::thread_rng());
        })?;

        let frame_field = field.clone();
        let animation = AnimationLoop::start(window, move || {
            frame_field.borrow_mut().advance(viewport.viewport());
        })?;

        Ok(FloatingDots {
            field,
            animation,
            resize,
        })
    }

    // Shared with the frame and resize callbacks; borrows must not be held
    // across a frame
    pub fn field(&self) -> &Rc<RefCell<ParticleField<DomSurface>>> {
        &self.field
    }
}

#[wasm_bindgen]
impl FloatingDots {
    pub fn len(&self) -> usize {
        self.field.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.field.borrow().is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    // Stops the frame loop and unsubscribes from resize. The dots stay on the
    // page where they are.
    pub fn cancel(&mut self) {
        if !self.animation.is_running() {
            return;
        }
        self.animation.cancel();
        self.resize.remove();
        log!("stopped dots");
    }
}

impl Drop for FloatingDots {
    fn drop(&mut self) {
        self.cancel();
    }
}
