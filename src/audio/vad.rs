//! Voice Activity Detection (VAD) seam for per-frame speech/silence classification.
//!
//! The collector only depends on [`VadEngine`]; concrete detectors live behind it.

use anyhow::{bail, Result};

/// Per-frame speech/silence classifier.
///
/// # Frame Contract
/// `frame` is little-endian mono 16-bit PCM. Implementations decide which
/// `(sample_rate, frame.len())` combinations they accept and return `Err` for
/// anything else. The collector treats an error as fatal for the whole run.
pub trait VadEngine {
    fn process_frame(&mut self, sample_rate: u32, frame: &[u8]) -> Result<VadDecision>;
    fn reset(&mut self);
    fn name(&self) -> &'static str {
        "unknown_vad"
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VadDecision {
    Speech,
    Silence,
}

impl VadDecision {
    pub fn is_speech(self) -> bool {
        matches!(self, VadDecision::Speech)
    }
}

impl From<bool> for VadDecision {
    fn from(voiced: bool) -> Self {
        if voiced {
            VadDecision::Speech
        } else {
            VadDecision::Silence
        }
    }
}

/// Decodes little-endian 16-bit samples. A trailing odd byte is ignored.
pub(crate) fn pcm_samples(frame: &[u8]) -> impl Iterator<Item = i16> + '_ {
    frame
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
}

/// RMS level of a PCM frame in dBFS.
pub(crate) fn rms_db(frame: &[u8]) -> f32 {
    let mut energy = 0.0f64;
    let mut count = 0usize;
    for sample in pcm_samples(frame) {
        let normalized = f64::from(sample) / 32_768.0;
        energy += normalized * normalized;
        count += 1;
    }
    if count == 0 {
        return -120.0;
    }
    let rms = (energy / count as f64).sqrt().max(1e-6) as f32;
    20.0 * rms.log10()
}

/// Lightweight VAD that operates on RMS energy. Selected with
/// `--vad-engine simple`; unlike Earshot it accepts any sample rate.
#[derive(Debug, Clone)]
pub struct SimpleThresholdVad {
    threshold_db: f32,
}

impl SimpleThresholdVad {
    pub fn new(threshold_db: f32) -> Self {
        Self { threshold_db }
    }
}

impl VadEngine for SimpleThresholdVad {
    fn process_frame(&mut self, sample_rate: u32, frame: &[u8]) -> Result<VadDecision> {
        if sample_rate == 0 {
            bail!("sample rate must be non-zero");
        }
        if frame.is_empty() || frame.len() % 2 != 0 {
            bail!(
                "frame of {} bytes is not whole 16-bit samples",
                frame.len()
            );
        }
        Ok(VadDecision::from(rms_db(frame) >= self.threshold_db))
    }

    fn reset(&mut self) {}

    fn name(&self) -> &'static str {
        "simple_threshold_vad"
    }
}
