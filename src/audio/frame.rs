//! Borrowed views over a mono 16-bit PCM byte buffer.

use super::BYTES_PER_SAMPLE;
use std::time::Duration;

/// Fixed-duration slice of the source audio. Never copies sample data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    audio: &'a [u8],
    offset: usize,
    len: usize,
    pub timestamp: Duration,
    pub duration: Duration,
    /// Written once by the collector; `false` until classified.
    pub silence: bool,
}

impl<'a> Frame<'a> {
    /// `offset + len` must lie within `audio`.
    pub(crate) fn new(
        audio: &'a [u8],
        offset: usize,
        len: usize,
        timestamp: Duration,
        duration: Duration,
    ) -> Self {
        debug_assert!(offset + len <= audio.len());
        Self {
            audio,
            offset,
            len,
            timestamp,
            duration,
            silence: false,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bytes(&self) -> &'a [u8] {
        &self.audio[self.offset..self.offset + self.len]
    }

    pub fn end(&self) -> Duration {
        self.timestamp + self.duration
    }

    pub(super) fn source(&self) -> &'a [u8] {
        self.audio
    }
}

/// One detected voiced episode as a contiguous span of the source audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    bytes: &'a [u8],
    offset: usize,
    frames: usize,
    pub start: Duration,
    pub end: Duration,
}

impl<'a> Segment<'a> {
    /// Builds a segment spanning `frames`, which must be contiguous, equal-length
    /// and in time order. Returns `None` for an empty run.
    pub(crate) fn from_frames(frames: &[Frame<'a>]) -> Option<Self> {
        let first = frames.first()?;
        let last = frames.last()?;
        let len: usize = frames.iter().map(Frame::len).sum();
        debug_assert_eq!(first.offset() + len, last.offset() + last.len());
        let bytes = first.source().get(first.offset()..first.offset() + len)?;
        Some(Self {
            bytes,
            offset: first.offset(),
            frames: frames.len(),
            start: first.timestamp,
            end: last.end(),
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of frames (voiced and padding) the segment covers.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn duration(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }
}

/// Bytes per frame for `frame_ms` of mono 16-bit audio at `sample_rate`.
pub fn frame_byte_len(sample_rate: u32, frame_ms: u64) -> usize {
    let samples = u64::from(sample_rate) * frame_ms / 1000;
    samples as usize * BYTES_PER_SAMPLE
}

/// Slices `audio` into consecutive, equal-length frames of `frame_ms`.
///
/// A trailing remainder shorter than one frame is dropped so every frame has
/// the same length.
pub fn generate_frames(audio: &[u8], sample_rate: u32, frame_ms: u64) -> Vec<Frame<'_>> {
    let frame_len = frame_byte_len(sample_rate, frame_ms);
    if frame_len == 0 || sample_rate == 0 {
        return Vec::new();
    }
    let samples = (frame_len / BYTES_PER_SAMPLE) as u64;
    let duration = Duration::from_nanos(samples * 1_000_000_000 / u64::from(sample_rate));
    (0..audio.len() / frame_len)
        .map(|index| {
            let timestamp = Duration::from_nanos(duration.as_nanos() as u64 * index as u64);
            Frame::new(audio, index * frame_len, frame_len, timestamp, duration)
        })
        .collect()
}
