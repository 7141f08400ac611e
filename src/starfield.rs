//! Canvas glue for the starfield: mounts a canvas per marked container and
//! keeps the pure simulation fed with pointer, size and theme changes.

use crate::core::{FieldParams, FieldSim, Theme, OFFSCREEN};
use crate::dom;
use crate::events;
use crate::theme;
use glam::Vec2;
use rand::{thread_rng, Rng};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct StarField {
    canvas: web::HtmlCanvasElement,
    context: web::CanvasRenderingContext2d,
    sim: Rc<RefCell<FieldSim>>,
    pointer: Rc<Cell<Vec2>>,
    color: Rc<Cell<(u8, u8, u8)>>,
}

/// Mount one field per `.starfield` container. Containers that already host
/// a canvas are skipped so re-initialisation cannot double up.
pub fn mount_all(document: &web::Document) -> Vec<StarField> {
    let mut fields = Vec::new();
    let Ok(list) = document.query_selector_all(".starfield") else {
        return fields;
    };
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(section) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        if section.query_selector("canvas").ok().flatten().is_some() {
            continue;
        }
        match StarField::mount(document, &section) {
            Ok(field) => fields.push(field),
            Err(e) => log::error!("[starfield] mount error: {:?}", e),
        }
    }
    fields
}

impl StarField {
    pub fn mount(document: &web::Document, section: &web::HtmlElement) -> Result<Self, JsValue> {
        let canvas: web::HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        let style = canvas.style();
        for (k, v) in [
            ("position", "absolute"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
            ("z-index", "0"),
            ("border-radius", "16px"),
        ] {
            _ = style.set_property(k, v);
        }
        _ = section.style().set_property("position", "relative");
        section.prepend_with_node_1(&canvas)?;

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()?;

        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        let sim = Rc::new(RefCell::new(FieldSim::new(
            w,
            h,
            FieldParams::default(),
            thread_rng().gen(),
        )));
        let pointer = Rc::new(Cell::new(OFFSCREEN));
        let color = Rc::new(Cell::new(theme::current(document).star_rgb()));

        events::wire_pointer_tracking(section, &canvas, &pointer);
        wire_resize(&canvas, &sim);
        wire_theme_observer(document, &color);

        Ok(Self {
            canvas,
            context,
            sim,
            pointer,
            color,
        })
    }

    /// One animation frame: advance the simulation, then repaint.
    pub fn draw(&self) {
        let mut sim = self.sim.borrow_mut();
        sim.step(self.pointer.get());

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.context.clear_rect(0.0, 0.0, w, h);

        let (r, g, b) = self.color.get();
        let radius = sim.params.star_radius as f64;
        for star in sim.stars() {
            self.context.set_fill_style_str(&format!(
                "rgba({}, {}, {}, {})",
                r,
                g,
                b,
                star.alpha.abs()
            ));
            self.context.begin_path();
            _ = self.context.arc(
                star.pos.x as f64,
                star.pos.y as f64,
                radius,
                0.0,
                std::f64::consts::TAU,
            );
            self.context.fill();
        }
    }
}

fn wire_resize(canvas: &web::HtmlCanvasElement, sim: &Rc<RefCell<FieldSim>>) {
    let canvas = canvas.clone();
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        sim.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Recolour stars when the root `data-theme` attribute flips, without
/// interrupting the animation loop.
fn wire_theme_observer(document: &web::Document, color: &Rc<Cell<(u8, u8, u8)>>) {
    let Some(root) = document.document_element() else {
        return;
    };
    let root_for_cb = root.clone();
    let color = color.clone();
    let closure = Closure::wrap(Box::new(
        move |_mutations: js_sys::Array, _observer: web::MutationObserver| {
            let theme = Theme::from_attr(root_for_cb.get_attribute("data-theme").as_deref());
            color.set(theme.star_rgb());
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);
    match web::MutationObserver::new(closure.as_ref().unchecked_ref()) {
        Ok(observer) => {
            let init = web::MutationObserverInit::new();
            init.set_attributes(true);
            init.set_attribute_filter(&js_sys::Array::of1(&"data-theme".into()));
            if let Err(e) = observer.observe_with_options(&root, &init) {
                log::error!("[starfield] theme observer error: {:?}", e);
            }
        }
        Err(e) => log::error!("[starfield] theme observer error: {:?}", e),
    }
    closure.forget();
}
