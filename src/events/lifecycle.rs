use crate::audio::AudioSync;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Force one final snapshot write when the page is hidden or unloading so
/// the next load (or another tab) resumes near the correct position.
pub fn wire_page_hide(sync: &AudioSync) {
    if let Some(document) = dom::window_document() {
        let sync = sync.clone();
        let doc = document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if doc.hidden() {
                sync.force_snapshot();
            }
        }) as Box<dyn FnMut()>);
        _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(window) = web::window() {
        let sync = sync.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            sync.force_snapshot();
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
