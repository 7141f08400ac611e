//! Light/dark theme toggle: root attribute, button icon, themed images.

use crate::constants::THEME_KEY;
use crate::core::Theme;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const MOON_SVG: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"/></svg>"#;

const SUN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="arcs"><circle cx="12" cy="12" r="5"/><path d="M12 1v2M12 21v2M4.2 4.2l1.4 1.4M18.4 18.4l1.4 1.4M1 12h2M21 12h2M4.2 19.8l1.4-1.4M18.4 5.6l1.4-1.4"/></svg>"#;

/// Theme currently reflected by the root element attribute.
pub fn current(document: &web::Document) -> Theme {
    let attr = document
        .document_element()
        .and_then(|root| root.get_attribute("data-theme"));
    Theme::from_attr(attr.as_deref())
}

/// Apply the durable preference (default dark) on page load.
pub fn apply_saved(document: &web::Document) {
    let saved = dom::local_storage().and_then(|s| dom::storage_get(&s, THEME_KEY));
    apply(document, Theme::from_saved(saved.as_deref()));
}

pub fn wire_toggle_button(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, "theme-toggle", move || {
        let next = current(&doc).toggled();
        apply(&doc, next);
        if let Some(s) = dom::local_storage() {
            dom::storage_set(&s, THEME_KEY, next.as_str());
        }
        log::info!("[theme] {}", next.as_str());
    });
}

/// Applying a theme is idempotent: attribute, icon and image sources are
/// all functions of the target theme alone.
pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        match theme.attr_value() {
            Some(v) => _ = root.set_attribute("data-theme", v),
            None => _ = root.remove_attribute("data-theme"),
        }
    }
    update_button_icon(document, theme);
    swap_themed_images(document, theme);
}

fn update_button_icon(document: &web::Document, theme: Theme) {
    if let Some(btn) = document.get_element_by_id("theme-toggle") {
        btn.set_inner_html(match theme {
            Theme::Dark => MOON_SVG,
            Theme::Light => SUN_SVG,
        });
    }
}

/// Any image carrying `data-dark-src`/`data-light-src` attributes follows
/// the theme. Images missing the attribute for the current theme are left
/// untouched.
fn swap_themed_images(document: &web::Document, theme: Theme) {
    let Ok(list) = document.query_selector_all("img[data-dark-src]") else {
        return;
    };
    let attr = match theme {
        Theme::Dark => "data-dark-src",
        Theme::Light => "data-light-src",
    };
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(img) = node.dyn_into::<web::HtmlImageElement>() else {
            continue;
        };
        if let Some(src) = img.get_attribute(attr) {
            img.set_src(&src);
        }
    }
}
