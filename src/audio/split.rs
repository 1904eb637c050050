//! One-call pipeline: frame the PCM buffer, classify, collect segments.

use super::collector::VadCollector;
use super::frame::{frame_byte_len, generate_frames, Segment};
use super::vad::VadEngine;
use super::{DEFAULT_FRAME_MS, DEFAULT_PADDING_MS};
use anyhow::{bail, Result};
use tracing::info;

/// Frame and padding durations for one segmentation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    pub frame_duration_ms: u64,
    pub padding_duration_ms: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            frame_duration_ms: DEFAULT_FRAME_MS,
            padding_duration_ms: DEFAULT_PADDING_MS,
        }
    }
}

impl SplitConfig {
    /// Padding window capacity in frames (integer division).
    pub fn window_frames(&self) -> usize {
        if self.frame_duration_ms == 0 {
            return 0;
        }
        (self.padding_duration_ms / self.frame_duration_ms) as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_duration_ms == 0 {
            bail!("frame duration must be non-zero");
        }
        if self.window_frames() == 0 {
            bail!(
                "padding of {} ms is shorter than one {} ms frame",
                self.padding_duration_ms,
                self.frame_duration_ms
            );
        }
        Ok(())
    }
}

/// Splits mono 16-bit little-endian PCM into voiced segments.
///
/// The configuration is checked before any frame is classified; an engine error
/// aborts the run with no partial output.
pub fn split_pcm<'a, V>(
    pcm: &'a [u8],
    sample_rate: u32,
    cfg: &SplitConfig,
    vad: &mut V,
) -> Result<Vec<Segment<'a>>>
where
    V: VadEngine + ?Sized,
{
    cfg.validate()?;
    if frame_byte_len(sample_rate, cfg.frame_duration_ms) == 0 {
        bail!(
            "{} ms at {sample_rate} Hz is shorter than one sample",
            cfg.frame_duration_ms
        );
    }
    let collector = VadCollector::new(sample_rate, cfg.window_frames())?;
    let mut frames = generate_frames(pcm, sample_rate, cfg.frame_duration_ms);
    vad.reset();
    let segments = collector.collect(vad, &mut frames)?;
    info!(
        engine = vad.name(),
        frames = frames.len(),
        window_frames = collector.window_frames(),
        segments = segments.len(),
        "vad split complete"
    );
    Ok(segments)
}
