//! Voice activity segmentation of in-memory PCM audio.
//!
//! Audio is mono 16-bit little-endian PCM. It is sliced into fixed-duration
//! frames, each frame is classified by a [`VadEngine`], and a padded sliding
//! window turns the verdicts into contiguous voiced [`Segment`]s.

/// Mono 16-bit PCM.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Default frame duration (milliseconds).
pub const DEFAULT_FRAME_MS: u64 = 30;

/// Default padding window span (milliseconds).
pub const DEFAULT_PADDING_MS: u64 = 300;

mod collector;
mod frame;
mod ring_buffer;
mod split;
mod vad;

pub use collector::{VadCollector, TRIGGER_RATIO};
pub use frame::{frame_byte_len, generate_frames, Frame, Segment};
pub use ring_buffer::{Iter, RingBuffer};
pub use split::{split_pcm, SplitConfig};
pub use vad::{SimpleThresholdVad, VadDecision, VadEngine};

pub(crate) use vad::pcm_samples;
