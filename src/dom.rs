use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// One-shot document-level click listener; consumed by the first click.
pub fn add_once_click_listener(document: &web::Document, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

#[inline]
pub fn session_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.session_storage().ok().flatten())
}

#[inline]
pub fn storage_get(storage: &web::Storage, key: &str) -> Option<String> {
    storage.get_item(key).ok().flatten()
}

#[inline]
pub fn storage_set(storage: &web::Storage, key: &str, value: &str) {
    _ = storage.set_item(key, value);
}

#[inline]
pub fn storage_remove(storage: &web::Storage, key: &str) {
    _ = storage.remove_item(key);
}

/// Match the canvas backing store to its CSS size and return the extent.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() as u32).max(1);
    let h_px = (rect.height() as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px as f32, h_px as f32)
}
