// Host-side tests for the audio state machine and recovery planning.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod sound {
    include!("../src/core/sound.rs");
}

use sound::*;

#[test]
fn toggle_order_is_exactly_cyclic() {
    assert_eq!(SoundState::Off.next(), SoundState::Low);
    assert_eq!(SoundState::Low.next(), SoundState::High);
    assert_eq!(SoundState::High.next(), SoundState::Off);

    // Three toggles return to the start from any state.
    for start in [SoundState::Off, SoundState::Low, SoundState::High] {
        assert_eq!(start.next().next().next(), start);
    }
}

#[test]
fn volume_levels_match_state() {
    assert_eq!(SoundState::Off.volume(), 0.0);
    assert_eq!(SoundState::Low.volume(), 0.1);
    assert_eq!(SoundState::High.volume(), 0.5);
    assert!(!SoundState::Off.is_audible());
    assert!(SoundState::Low.is_audible());
    assert!(SoundState::High.is_audible());
}

#[test]
fn string_round_trip_and_fallback() {
    for state in [SoundState::Off, SoundState::Low, SoundState::High] {
        assert_eq!(SoundState::parse(state.as_str()), Some(state));
    }
    assert_eq!(SoundState::parse(""), None);
    assert_eq!(SoundState::parse("loud"), None);
    assert_eq!(SoundState::parse("OFF"), None);
    assert_eq!(SoundState::default(), SoundState::Off);
}

#[test]
fn live_session_snapshot_resumes_at_recorded_time() {
    let snap = Snapshot {
        state: SoundState::High,
        time: 42.0,
    };
    assert_eq!(
        plan_restore(Some(snap), Some(SoundState::Low)),
        Restore::Resume(snap)
    );
}

#[test]
fn off_or_missing_snapshot_falls_back_to_preference() {
    let off_snap = Snapshot {
        state: SoundState::Off,
        time: 3.0,
    };
    assert_eq!(
        plan_restore(Some(off_snap), Some(SoundState::Low)),
        Restore::Idle(SoundState::Low)
    );
    assert_eq!(
        plan_restore(None, Some(SoundState::High)),
        Restore::Idle(SoundState::High)
    );
    assert_eq!(plan_restore(None, None), Restore::Idle(SoundState::Off));
    assert_eq!(
        plan_restore(Some(off_snap), None),
        Restore::Idle(SoundState::Off)
    );
}

#[test]
fn adoption_requires_a_differing_remote_state() {
    assert!(!should_adopt(SoundState::Off, SoundState::Off));
    assert!(!should_adopt(SoundState::High, SoundState::High));
    assert!(should_adopt(SoundState::Off, SoundState::High));
    assert!(should_adopt(SoundState::High, SoundState::Low));
}

#[test]
fn idle_tab_converges_on_broadcast_snapshot() {
    // A tab sitting at off receives {high, 42.0} from a sibling.
    let mut local = SoundState::Off;
    let mut position = 0.0_f64;
    let remote = Snapshot {
        state: SoundState::High,
        time: 42.0,
    };

    if should_adopt(local, remote.state) {
        local = remote.state;
        position = remote.time;
    }
    assert_eq!(local, SoundState::High);
    assert_eq!(position, 42.0);

    // A duplicate of the same message is a no-op.
    assert!(!should_adopt(local, remote.state));
}
