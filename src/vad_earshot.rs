//! Earshot-powered Voice Activity Detector adapter implementing `VadEngine`.

use crate::audio::{pcm_samples, VadDecision, VadEngine, BYTES_PER_SAMPLE};
use anyhow::{bail, Result};
use earshot::{VoiceActivityDetector, VoiceActivityProfile};

/// Sample rates Earshot classifies.
pub const EARSHOT_RATES: [u32; 4] = [8_000, 16_000, 32_000, 48_000];

/// Frame durations Earshot accepts (milliseconds).
pub const EARSHOT_FRAME_MS: [u64; 3] = [10, 20, 30];

/// Whether a frame of `frame_bytes` at `sample_rate` can be classified.
pub fn valid_rate_and_frame_length(sample_rate: u32, frame_bytes: usize) -> bool {
    if !EARSHOT_RATES.contains(&sample_rate) || frame_bytes % BYTES_PER_SAMPLE != 0 {
        return false;
    }
    let samples = (frame_bytes / BYTES_PER_SAMPLE) as u64;
    EARSHOT_FRAME_MS
        .iter()
        .any(|ms| u64::from(sample_rate) * ms / 1000 == samples)
}

/// Thin wrapper that adapts `earshot` to the crate's `VadEngine` trait.
pub struct EarshotVad {
    detector: VoiceActivityDetector,
    aggressiveness: u8,
    scratch: Vec<i16>,
}

impl EarshotVad {
    /// `aggressiveness` runs from 0 (keeps the most audio) to 3 (filters hardest).
    pub fn new(aggressiveness: u8) -> Result<Self> {
        let profile = match aggressiveness {
            0 => VoiceActivityProfile::QUALITY,
            1 => VoiceActivityProfile::LBR,
            2 => VoiceActivityProfile::AGGRESSIVE,
            3 => VoiceActivityProfile::VERY_AGGRESSIVE,
            other => bail!("aggressiveness must be between 0 and 3, got {other}"),
        };
        Ok(Self {
            detector: VoiceActivityDetector::new(profile),
            aggressiveness,
            scratch: Vec::new(),
        })
    }

    pub fn aggressiveness(&self) -> u8 {
        self.aggressiveness
    }
}

impl VadEngine for EarshotVad {
    fn process_frame(&mut self, sample_rate: u32, frame: &[u8]) -> Result<VadDecision> {
        if !valid_rate_and_frame_length(sample_rate, frame.len()) {
            bail!(
                "earshot needs 10/20/30 ms frames at {EARSHOT_RATES:?} Hz, got {} bytes at {sample_rate} Hz",
                frame.len()
            );
        }
        self.scratch.clear();
        self.scratch.extend(pcm_samples(frame));
        let prediction = match sample_rate {
            8_000 => self.detector.predict_8khz(&self.scratch),
            16_000 => self.detector.predict_16khz(&self.scratch),
            32_000 => self.detector.predict_32khz(&self.scratch),
            _ => self.detector.predict_48khz(&self.scratch),
        };
        match prediction {
            Ok(voiced) => Ok(VadDecision::from(voiced)),
            Err(_) => bail!("earshot rejected a {} sample frame", self.scratch.len()),
        }
    }

    fn reset(&mut self) {
        self.detector.reset();
    }

    fn name(&self) -> &'static str {
        "earshot_vad"
    }
}
