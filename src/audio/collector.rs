//! Padded sliding-window segmentation with trigger/detrigger hysteresis.
//!
//! While idle, frames flow through a padding window. Once more than 90% of the
//! window is voiced the collector triggers, keeps the window contents as lead-in
//! and accumulates every following frame. It detriggers when more than 90% of
//! the window is unvoiced again, emitting the accumulated run as one segment.

use super::frame::{Frame, Segment};
use super::ring_buffer::RingBuffer;
use super::vad::VadEngine;
use anyhow::{bail, Context, Result};
use tracing::debug;

/// Fraction of the window that must agree before the state flips.
pub const TRIGGER_RATIO: f64 = 0.9;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum CollectorState {
    NotTriggered,
    Triggered,
}

/// Segments a classified frame stream into voiced spans.
#[derive(Debug, Clone)]
pub struct VadCollector {
    sample_rate: u32,
    window_frames: usize,
}

impl VadCollector {
    /// `window_frames` is the padding window capacity and must be at least 1.
    pub fn new(sample_rate: u32, window_frames: usize) -> Result<Self> {
        if sample_rate == 0 {
            bail!("sample rate must be non-zero");
        }
        if window_frames == 0 {
            bail!("padding window must hold at least one frame");
        }
        Ok(Self {
            sample_rate,
            window_frames,
        })
    }

    pub fn window_frames(&self) -> usize {
        self.window_frames
    }

    /// Classifies each frame in order, writing the verdict into `Frame::silence`,
    /// and returns the detected segments in time order.
    ///
    /// Fails without returning any segments if the engine rejects a frame.
    pub fn collect<'a, V>(&self, vad: &mut V, frames: &mut [Frame<'a>]) -> Result<Vec<Segment<'a>>>
    where
        V: VadEngine + ?Sized,
    {
        let mut window = RingBuffer::new(self.window_frames)?;
        // Thresholds use the configured capacity, not the current fill level.
        let threshold = TRIGGER_RATIO * window.capacity() as f64;
        let mut state = CollectorState::NotTriggered;
        let mut voiced_frames: Vec<Frame<'a>> = Vec::new();
        let mut segments = Vec::new();

        for (index, frame) in frames.iter_mut().enumerate() {
            let decision = vad
                .process_frame(self.sample_rate, frame.bytes())
                .with_context(|| {
                    format!(
                        "{} rejected frame {index} ({} bytes at {} Hz)",
                        vad.name(),
                        frame.len(),
                        self.sample_rate
                    )
                })?;
            frame.silence = !decision.is_speech();

            match state {
                CollectorState::NotTriggered => {
                    window.push(*frame);
                    let num_voiced = window.iter().filter(|f| !f.silence).count();
                    if num_voiced as f64 > threshold {
                        state = CollectorState::Triggered;
                        if let Some(lead_in) = window.front() {
                            debug!(start_ms = lead_in.timestamp.as_millis() as u64, "vad trigger");
                        }
                        voiced_frames.extend(window.iter().copied());
                        window.clear();
                    }
                }
                CollectorState::Triggered => {
                    voiced_frames.push(*frame);
                    window.push(*frame);
                    let num_unvoiced = window.iter().filter(|f| f.silence).count();
                    if num_unvoiced as f64 > threshold {
                        state = CollectorState::NotTriggered;
                        debug!(end_ms = frame.end().as_millis() as u64, "vad detrigger");
                        segments.extend(Segment::from_frames(&voiced_frames));
                        window.clear();
                        voiced_frames.clear();
                    }
                }
            }
        }

        // Input ran out mid-episode; keep the trailing speech.
        if let Some(segment) = Segment::from_frames(&voiced_frames) {
            debug!(end_ms = segment.end.as_millis() as u64, "vad flush");
            segments.push(segment);
        }
        Ok(segments)
    }
}
