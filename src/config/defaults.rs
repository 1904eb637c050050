use super::VadEngineKind;
use crate::audio;

pub(super) const DEFAULT_FRAME_MS: u64 = audio::DEFAULT_FRAME_MS;
pub(super) const DEFAULT_PADDING_MS: u64 = audio::DEFAULT_PADDING_MS;

pub const DEFAULT_AGGRESSIVENESS: u8 = 2;
pub const MAX_AGGRESSIVENESS: u8 = 3;
pub const DEFAULT_VAD_THRESHOLD_DB: f32 = -40.0;
pub const MAX_PADDING_MS: u64 = 10_000;

/// Frame durations every VAD engine accepts.
pub const SUPPORTED_FRAME_MS: [u64; 3] = [10, 20, 30];

pub fn default_vad_engine() -> VadEngineKind {
    if cfg!(feature = "vad_earshot") {
        VadEngineKind::Earshot
    } else {
        VadEngineKind::Simple
    }
}
