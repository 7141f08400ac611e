// Host-side tests pinning the external storage/channel contract.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn storage_keys_match_the_published_interface() {
    // Other tabs and reloads read these exact keys; changing them breaks
    // cross-tab convergence with already-open pages.
    assert_eq!(THEME_KEY, "theme");
    assert_eq!(SOUND_KEY, "sound");
    assert_eq!(AUDIO_STATE_KEY, "bgm_state");
    assert_eq!(AUDIO_TIME_KEY, "bgm_time");
    assert_eq!(AUDIO_CHANNEL, "audio_sync");
}

#[test]
fn storage_keys_are_distinct() {
    let keys = [THEME_KEY, SOUND_KEY, AUDIO_STATE_KEY, AUDIO_TIME_KEY];
    for (i, a) in keys.iter().enumerate() {
        for b in keys.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn snapshot_cadence_is_sub_second() {
    assert!(SNAPSHOT_PERIOD_MS > 0);
    assert!(SNAPSHOT_PERIOD_MS < 1000);
}

#[test]
fn audio_source_is_a_rooted_path() {
    assert!(AUDIO_SRC.starts_with('/'));
    assert!(!AUDIO_SRC.is_empty());
}
