/// Storage keys, channel name and timing shared across modules.
///
/// These mirror the page's external interface: other tabs and reloads read
/// the same keys, so the values here are part of the wire contract.
// Durable preferences (localStorage)
pub const THEME_KEY: &str = "theme";
pub const SOUND_KEY: &str = "sound";

// Session snapshot (sessionStorage), cleared whenever sound turns off
pub const AUDIO_STATE_KEY: &str = "bgm_state";
pub const AUDIO_TIME_KEY: &str = "bgm_time";

// Same-origin channel carrying `{state, time}` between tabs
pub const AUDIO_CHANNEL: &str = "audio_sync";

// Background track
pub const AUDIO_SRC: &str = "/media/song.wav";

// Snapshot cadence (milliseconds)
pub const SNAPSHOT_PERIOD_MS: i32 = 100;
