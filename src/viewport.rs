// Current size of the page's visible area, in CSS pixels

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport { width, height }
    }
}

// Anything that can report the viewport size. Queried on every use, so
// implementations should not cache.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

