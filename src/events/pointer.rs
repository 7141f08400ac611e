use crate::core::OFFSCREEN;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over a starfield container in canvas-local pixels.
/// Leaving the container parks the virtual pointer far off-canvas, which
/// disables the repulsion influence.
pub fn wire_pointer_tracking(
    section: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<Cell<Vec2>>,
) {
    wire_pointermove(section, canvas, pointer);
    wire_pointerleave(section, pointer);
}

fn wire_pointermove(
    section: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<Cell<Vec2>>,
) {
    let canvas = canvas.clone();
    let pointer = pointer.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas.get_bounding_client_rect();
        pointer.set(Vec2::new(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
        ));
    }) as Box<dyn FnMut(_)>);
    _ = section.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(section: &web::HtmlElement, pointer: &Rc<Cell<Vec2>>) {
    let pointer = pointer.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        pointer.set(OFFSCREEN);
    }) as Box<dyn FnMut(_)>);
    _ = section.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
