//! Background-music control with cross-tab convergence.
//!
//! One looping audio element per tab; state changes are mirrored into
//! session storage every snapshot period and broadcast to sibling tabs,
//! which adopt whatever state arrives last.

use crate::constants::{
    AUDIO_CHANNEL, AUDIO_SRC, AUDIO_STATE_KEY, AUDIO_TIME_KEY, SNAPSHOT_PERIOD_MS, SOUND_KEY,
};
use crate::core::{plan_restore, should_adopt, Restore, Snapshot, SoundState};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const SOUND_OFF_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"></polygon><line x1="23" y1="9" x2="17" y2="15"></line><line x1="17" y1="9" x2="23" y2="15"></line></svg>"#;

const SOUND_LOW_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"></polygon><path d="M15.54 8.46a5 5 0 0 1 0 7.07"></path></svg>"#;

const SOUND_HIGH_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polygon points="11 5 6 9 2 9 2 15 6 15 11 19 11 5"></polygon><path d="M19.07 4.93a10 10 0 0 1 0 14.14"></path><path d="M15.54 8.46a5 5 0 0 1 0 7.07"></path></svg>"#;

/// Owner of the tab's audio element, broadcast channel and snapshot timer.
/// Cheap to clone; clones share the same underlying state.
#[derive(Clone)]
pub struct AudioSync {
    audio: web::HtmlAudioElement,
    channel: web::BroadcastChannel,
    state: Rc<Cell<SoundState>>,
    timer: Rc<RefCell<Option<i32>>>,
}

impl AudioSync {
    pub fn new() -> Result<Self, JsValue> {
        let audio = web::HtmlAudioElement::new_with_src(AUDIO_SRC)?;
        audio.set_loop(true);
        audio.set_preload("auto");
        let channel = web::BroadcastChannel::new(AUDIO_CHANNEL)?;
        Ok(Self {
            audio,
            channel,
            state: Rc::new(Cell::new(SoundState::Off)),
            timer: Rc::new(RefCell::new(None)),
        })
    }

    /// Startup recovery: a live session snapshot resumes playback at the
    /// recorded position; otherwise the durable preference only sets the
    /// icon and the next toggle starts from there.
    pub fn restore(&self) {
        let session = read_session_snapshot();
        let durable = dom::local_storage()
            .and_then(|s| dom::storage_get(&s, SOUND_KEY))
            .and_then(|v| SoundState::parse(&v));
        match plan_restore(session, durable) {
            Restore::Resume(snap) => {
                log::info!("[sound] resuming {} at {:.2}s", snap.state.as_str(), snap.time);
                self.state.set(snap.state);
                self.audio.set_current_time(snap.time);
                self.apply_state();
            }
            Restore::Idle(state) => {
                self.state.set(state);
                self.update_icon();
            }
        }
    }

    /// One user-initiated toggle step, persisting the new state.
    pub fn toggle(&self) {
        let next = self.state.get().next();
        self.state.set(next);
        if let Some(s) = dom::local_storage() {
            dom::storage_set(&s, SOUND_KEY, next.as_str());
        }
        if let Some(s) = dom::session_storage() {
            dom::storage_set(&s, AUDIO_STATE_KEY, next.as_str());
        }
        log::info!("[sound] state={}", next.as_str());
        self.apply_state();
    }

    pub fn wire_toggle_button(&self, document: &web::Document) {
        let sync = self.clone();
        dom::add_click_listener(document, "sound-toggle", move || sync.toggle());
    }

    /// Re-run the side effects of the current state: volume, playback,
    /// snapshot timer and session keys.
    pub fn apply_state(&self) {
        let state = self.state.get();
        if state.is_audible() {
            self.audio.set_volume(state.volume());
            self.start_playback();
            self.start_snapshots();
        } else {
            _ = self.audio.pause();
            self.audio.set_volume(0.0);
            self.stop_snapshots();
            if let Some(s) = dom::session_storage() {
                dom::storage_remove(&s, AUDIO_STATE_KEY);
                dom::storage_remove(&s, AUDIO_TIME_KEY);
            }
        }
        self.update_icon();
    }

    /// Adopt sibling-tab messages whenever they differ from local state.
    pub fn wire_channel(&self) {
        let sync = self.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MessageEvent| {
            let data = ev.data();
            let Some(remote) = js_sys::Reflect::get(&data, &"state".into())
                .ok()
                .and_then(|v| v.as_string())
                .and_then(|s| SoundState::parse(&s))
            else {
                return;
            };
            if !should_adopt(sync.state.get(), remote) {
                return;
            }
            log::info!("[sound] adopting {} from sibling tab", remote.as_str());
            sync.state.set(remote);
            if let Some(s) = dom::session_storage() {
                dom::storage_set(&s, AUDIO_STATE_KEY, remote.as_str());
            }
            if let Some(time) = js_sys::Reflect::get(&data, &"time".into())
                .ok()
                .and_then(|v| v.as_f64())
            {
                sync.audio.set_current_time(time);
                if let Some(s) = dom::session_storage() {
                    dom::storage_set(&s, AUDIO_TIME_KEY, &time.to_string());
                }
            }
            sync.apply_state();
        }) as Box<dyn FnMut(_)>);
        _ = self
            .channel
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One snapshot write outside the timer, for page hide/unload.
    pub fn force_snapshot(&self) {
        let state = self.state.get();
        if state.is_audible() {
            write_snapshot(&self.audio, state);
        }
    }

    // Autoplay may be rejected before any user gesture; swallow the
    // rejection and retry once on the next document click.
    fn start_playback(&self) {
        let Ok(promise) = self.audio.play() else {
            return;
        };
        let audio = self.audio.clone();
        spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                log::info!("[sound] autoplay blocked, retrying on next interaction");
                if let Some(doc) = dom::window_document() {
                    dom::add_once_click_listener(&doc, move || {
                        if let Ok(p) = audio.play() {
                            spawn_local(async move {
                                _ = JsFuture::from(p).await;
                            });
                        }
                    });
                }
            }
        });
    }

    // The previous interval is always cleared first so a rapid low -> high
    // transition never leaves two timers running.
    fn start_snapshots(&self) {
        self.stop_snapshots();
        let audio = self.audio.clone();
        let channel = self.channel.clone();
        let state = self.state.clone();
        let closure = Closure::wrap(Box::new(move || {
            let current = state.get();
            if current.is_audible() && !audio.paused() {
                write_snapshot(&audio, current);
                post_snapshot(
                    &channel,
                    Snapshot {
                        state: current,
                        time: audio.current_time(),
                    },
                );
            }
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            match w.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                SNAPSHOT_PERIOD_MS,
            ) {
                Ok(handle) => *self.timer.borrow_mut() = Some(handle),
                Err(e) => log::error!("[sound] snapshot timer error: {:?}", e),
            }
        }
        closure.forget();
    }

    fn stop_snapshots(&self) {
        if let Some(handle) = self.timer.borrow_mut().take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(handle);
            }
        }
    }

    fn update_icon(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        if let Some(btn) = document.get_element_by_id("sound-toggle") {
            btn.set_inner_html(match self.state.get() {
                SoundState::Off => SOUND_OFF_SVG,
                SoundState::Low => SOUND_LOW_SVG,
                SoundState::High => SOUND_HIGH_SVG,
            });
        }
    }
}

fn read_session_snapshot() -> Option<Snapshot> {
    let storage = dom::session_storage()?;
    let state = SoundState::parse(&dom::storage_get(&storage, AUDIO_STATE_KEY)?)?;
    let time = dom::storage_get(&storage, AUDIO_TIME_KEY)
        .and_then(|t| t.parse::<f64>().ok())
        .unwrap_or(0.0);
    Some(Snapshot { state, time })
}

fn write_snapshot(audio: &web::HtmlAudioElement, state: SoundState) {
    if let Some(s) = dom::session_storage() {
        dom::storage_set(&s, AUDIO_TIME_KEY, &audio.current_time().to_string());
        dom::storage_set(&s, AUDIO_STATE_KEY, state.as_str());
    }
}

fn post_snapshot(channel: &web::BroadcastChannel, snap: Snapshot) {
    let msg = js_sys::Object::new();
    _ = js_sys::Reflect::set(&msg, &"state".into(), &snap.state.as_str().into());
    _ = js_sys::Reflect::set(&msg, &"time".into(), &snap.time.into());
    _ = channel.post_message(&msg);
}
