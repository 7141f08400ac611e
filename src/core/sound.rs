/// Background-music volume level, advanced cyclically by the toggle button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SoundState {
    #[default]
    Off,
    Low,
    High,
}

impl SoundState {
    /// One toggle step: off -> low -> high -> off.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            SoundState::Off => SoundState::Low,
            SoundState::Low => SoundState::High,
            SoundState::High => SoundState::Off,
        }
    }

    /// Element volume applied when this state is entered.
    #[inline]
    pub fn volume(self) -> f64 {
        match self {
            SoundState::Off => 0.0,
            SoundState::Low => 0.1,
            SoundState::High => 0.5,
        }
    }

    #[inline]
    pub fn is_audible(self) -> bool {
        !matches!(self, SoundState::Off)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SoundState::Off => "off",
            SoundState::Low => "low",
            SoundState::High => "high",
        }
    }

    /// Storage/channel values are plain strings; anything unrecognised is
    /// treated as absent so reads fall back to a safe default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "off" => Some(SoundState::Off),
            "low" => Some(SoundState::Low),
            "high" => Some(SoundState::High),
            _ => None,
        }
    }
}

/// Persisted `{state, time}` pair used to resume playback position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub state: SoundState,
    pub time: f64,
}

/// Startup recovery decision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Restore {
    /// Seek to the snapshot time and resume playback.
    Resume(Snapshot),
    /// Show the state on the toggle icon but stay silent.
    Idle(SoundState),
}

/// A live (non-off) session snapshot wins over the durable preference;
/// otherwise fall back to the preference, defaulting to off. An off or
/// absent snapshot never resumes playback.
pub fn plan_restore(session: Option<Snapshot>, durable: Option<SoundState>) -> Restore {
    match session {
        Some(snap) if snap.state.is_audible() => Restore::Resume(snap),
        _ => Restore::Idle(durable.unwrap_or_default()),
    }
}

/// Cross-tab convergence: adopt whatever a sibling tab advertises whenever
/// it differs from the local state. Last message wins; there is no ordering
/// guarantee between fast-toggling tabs.
#[inline]
pub fn should_adopt(local: SoundState, remote: SoundState) -> bool {
    remote != local
}
