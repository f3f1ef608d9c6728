//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use floating_dots::config;
use floating_dots::dom::{self, DomSurface, WindowViewport};
use floating_dots::field::ParticleField;
use floating_dots::particle::DotStyle;
use floating_dots::surface::Surface;
use floating_dots::viewport::{Viewport, ViewportSource};
use floating_dots::{run, run_in, FloatingDots};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vecmath::Vector2;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event};

wasm_bindgen_test_configure!(run_in_browser);

fn container(id: &str) -> Element {
    let window = dom::window().unwrap();
    let document = dom::document(&window).unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn surface(id: &str) -> DomSurface {
    container(id);
    let document = dom::document(&dom::window().unwrap()).unwrap();
    DomSurface::for_container(document, id).unwrap()
}

fn style() -> DotStyle {
    DotStyle {
        opacity: 0.5,
        scale: 1.0,
        animation_duration: 2.0,
        animation_delay: 0.0,
    }
}

fn positions(dots: &FloatingDots) -> Vec<Vector2<f64>> {
    let field = dots.field().borrow();
    (0..field.len()).map(|i| field.position(i).unwrap()).collect()
}

// Moves the first dot somewhere no resize would put it
fn move_first(dots: &FloatingDots, pos: Vector2<f64>) {
    let mut field = dots.field().borrow_mut();
    let first = field.particles()[0].dot().clone();
    field.surface_mut().set_position(&first, pos);
}

fn dispatch_resize() {
    let window = dom::window().unwrap();
    let event = Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap();
}

// Resolves on the next requestAnimationFrame
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn create_dot_writes_styles() {
    let mut surface = surface("create-dot");
    let style = DotStyle {
        opacity: 0.5,
        scale: 0.75,
        animation_duration: 3.5,
        animation_delay: 1.25,
    };
    let dot = surface.create_dot([12.5, 40.0], &style).unwrap();

    assert!(dot.element().class_list().contains(config::DOT_CLASS));
    assert_eq!(surface.container().child_element_count(), 1);

    let css = dot.element().style();
    assert_eq!(css.get_property_value("left").unwrap(), "12.5px");
    assert_eq!(css.get_property_value("top").unwrap(), "40px");
    assert_eq!(css.get_property_value("opacity").unwrap(), "0.5");
    assert_eq!(css.get_property_value("transform").unwrap(), "scale(0.75)");
    assert_eq!(css.get_property_value("animation-duration").unwrap(), "3.5s");
    assert_eq!(css.get_property_value("animation-delay").unwrap(), "1.25s");

    assert_eq!(surface.position(&dot), [12.5, 40.0]);
}

#[wasm_bindgen_test]
fn position_follows_outside_writes() {
    let mut surface = surface("outside-writes");
    let dot = surface.create_dot([0.0, 0.0], &style()).unwrap();
    dot.element().style().set_property("left", "200px").unwrap();
    dot.element().style().set_property("top", "100px").unwrap();
    assert_eq!(surface.position(&dot), [200.0, 100.0]);
}

#[wasm_bindgen_test]
fn small_steps_survive_far_from_origin() {
    let mut surface = surface("precision");
    let dot = surface.create_dot([1500.0, 900.0], &style()).unwrap();
    let mut pos = [1500.0, 900.0];
    for _ in 0..10 {
        pos = [pos[0] + 0.001, pos[1] - 0.001];
        surface.set_position(&dot, pos);
        assert_eq!(surface.position(&dot), pos);
    }
    assert!(surface.position(&dot)[0] > 1500.0);
}

#[wasm_bindgen_test]
fn remove_dot_detaches_element() {
    let mut surface = surface("remove-dot");
    let dot = surface.create_dot([1.0, 1.0], &style()).unwrap();
    assert_eq!(surface.container().child_element_count(), 1);
    surface.remove_dot(&dot);
    assert_eq!(surface.container().child_element_count(), 0);
}

#[wasm_bindgen_test]
fn field_advances_dom_dots() {
    let mut rng = StdRng::seed_from_u64(1);
    let viewport = Viewport::new(800.0, 600.0);
    let mut field =
        ParticleField::create(surface("field"), config::DOT_COUNT, viewport, &mut rng).unwrap();
    assert_eq!(field.surface().container().child_element_count(), 25);

    let first = field.particles()[0].dot().clone();
    field.surface_mut().set_position(&first, [-10.5, 300.0]);
    field.advance(viewport);
    // |vx| < 0.125, so the dot always ends up past the left margin
    let [x, _] = field.position(0).unwrap();
    assert_eq!(x, 810.0);

    for _ in 0..100 {
        field.advance(viewport);
    }
    for i in 0..field.len() {
        let [x, y] = field.position(i).unwrap();
        assert!(x >= -10.0 && x <= 810.0);
        assert!(y >= -10.0 && y <= 610.0);
    }
}

#[wasm_bindgen_test]
fn window_viewport_reports_size() {
    let viewport = WindowViewport::new(dom::window().unwrap()).viewport();
    assert!(viewport.width >= 0.0);
    assert!(viewport.height >= 0.0);
}

#[wasm_bindgen_test]
fn run_in_missing_container_fails() {
    assert!(run_in("no-such-container").is_err());
}

#[wasm_bindgen_test]
fn resize_rescatters_until_cancelled() {
    container("resize");
    let mut dots = run_in("resize").unwrap();
    let window = dom::window().unwrap();
    let viewport = WindowViewport::new(window).viewport();

    move_first(&dots, [5000.0, 5000.0]);
    dispatch_resize();
    for [x, y] in positions(&dots) {
        assert!(x >= 0.0 && x < viewport.width);
        assert!(y >= 0.0 && y < viewport.height);
    }

    dots.cancel();
    move_first(&dots, [5000.0, 5000.0]);
    dispatch_resize();
    assert_eq!(positions(&dots)[0], [5000.0, 5000.0]);
}

#[wasm_bindgen_test]
async fn frames_move_dots_until_cancelled() {
    container("frames");
    let mut dots = run_in("frames").unwrap();

    let before = positions(&dots);
    next_frame().await;
    next_frame().await;
    let after = positions(&dots);
    assert_ne!(before, after);

    dots.cancel();
    next_frame().await;
    let stopped = positions(&dots);
    next_frame().await;
    next_frame().await;
    assert_eq!(stopped, positions(&dots));
}

#[wasm_bindgen_test]
fn run_and_cancel() {
    let host = container(config::CONTAINER_ID);
    let mut dots = run().unwrap();
    assert_eq!(dots.len(), config::DOT_COUNT);
    assert_eq!(host.child_element_count(), 25);
    assert!(dots.is_running());

    dots.cancel();
    assert!(!dots.is_running());
    // Cancelling twice is harmless
    dots.cancel();
    assert_eq!(dots.len(), config::DOT_COUNT);
}
