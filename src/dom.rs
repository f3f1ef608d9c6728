// DOM-backed surface and viewport. Each dot is an absolutely positioned
// `div.dot` under a container element; its inline left/top are the position.

use crate::config;
use crate::error::DotsError;
use crate::particle::DotStyle;
use crate::surface::Surface;
use crate::viewport::{Viewport, ViewportSource};
use std::cell::RefCell;
use std::rc::Rc;
use vecmath::Vector2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, DotsError> {
    web_sys::window().ok_or(DotsError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, DotsError> {
    window.document().ok_or(DotsError::NoDocument)
}

pub struct DomSurface {
    document: Document,
    container: Element,
}

// A rendered dot. The browser keeps only about six significant digits of an
// inline `left`/`top`, so the exact coordinates last written are kept next to
// the strings the browser stored for them. Clones share that record.
#[derive(Clone)]
pub struct DomDot {
    element: HtmlElement,
    written: Rc<RefCell<Written>>,
}

#[derive(Default)]
struct Written {
    pos: Vector2<f64>,
    left: String,
    top: String,
}

impl DomDot {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl DomSurface {
    pub fn new(document: Document, container: Element) -> DomSurface {
        DomSurface {
            document,
            container,
        }
    }

    // Looks the container up by id
    pub fn for_container(document: Document, container_id: &str) -> Result<DomSurface, DotsError> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| DotsError::MissingContainer(container_id.to_owned()))?;
        Ok(DomSurface::new(document, container))
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    fn write_position(dot: &DomDot, pos: Vector2<f64>) -> Result<(), DotsError> {
        let style = dot.element.style();
        style.set_property("left", &px(pos[0]))?;
        style.set_property("top", &px(pos[1]))?;
        *dot.written.borrow_mut() = Written {
            pos,
            left: style.get_property_value("left")?,
            top: style.get_property_value("top")?,
        };
        Ok(())
    }
}

impl Surface for DomSurface {
    type Dot = DomDot;

    fn create_dot(&mut self, pos: Vector2<f64>, style: &DotStyle) -> Result<DomDot, DotsError> {
        let element = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DotsError::Js("created element is not an HtmlElement".to_owned()))?;
        element.class_list().add_1(config::DOT_CLASS)?;
        let dot = DomDot {
            element,
            written: Rc::new(RefCell::new(Written::default())),
        };

        DomSurface::write_position(&dot, pos)?;
        let css = dot.element.style();
        css.set_property("opacity", &style.opacity.to_string())?;
        css.set_property("transform", &style.transform())?;
        css.set_property("animation-duration", &style.duration_css())?;
        css.set_property("animation-delay", &style.delay_css())?;

        self.container.append_child(&dot.element)?;
        Ok(dot)
    }

    // Exact coordinates while the inline style is still ours, otherwise
    // whatever was written over it
    fn position(&self, dot: &DomDot) -> Vector2<f64> {
        let style = dot.element.style();
        let left = style.get_property_value("left").unwrap_or_default();
        let top = style.get_property_value("top").unwrap_or_default();

        let written = dot.written.borrow();
        if left == written.left && top == written.top {
            return written.pos;
        }
        match (parse_px(&left), parse_px(&top)) {
            (Some(x), Some(y)) => [x, y],
            _ => {
                let rect = dot.element.get_bounding_client_rect();
                [rect.left(), rect.top()]
            }
        }
    }

    fn set_position(&mut self, dot: &DomDot, pos: Vector2<f64>) {
        if let Err(e) = DomSurface::write_position(dot, pos) {
            log!("failed to move dot: {}", e);
        }
    }

    fn remove_dot(&mut self, dot: &DomDot) {
        dot.element.remove();
    }
}

// Reads window.innerWidth / innerHeight on every call
pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: Window) -> WindowViewport {
        WindowViewport { window }
    }
}

impl ViewportSource for WindowViewport {
    fn viewport(&self) -> Viewport {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Viewport::new(width, height)
    }
}

pub fn px(value: f64) -> String {
    format!("{}px", value)
}

pub fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}
