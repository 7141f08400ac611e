#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod starfield;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Wire up the three independent page subsystems. Optional DOM nodes
/// (buttons, containers, themed images) are simply skipped when absent;
/// nothing here is fatal to the page.
async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Theme: apply the durable preference before first paint of our UI bits.
    theme::apply_saved(&document);
    theme::wire_toggle_button(&document);

    // Background music with cross-tab convergence.
    let sync = audio::AudioSync::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    sync.restore();
    sync.wire_channel();
    sync.wire_toggle_button(&document);
    events::wire_page_hide(&sync);

    // Starfields, one per marked container, on a shared redraw loop.
    let fields = starfield::mount_all(&document);
    log::info!("[starfield] mounted {} field(s)", fields.len());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { fields }));
    frame::start_loop(frame_ctx);

    Ok(())
}
