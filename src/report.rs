//! Segment summaries printed after a split run.

use crate::audio::Segment;
use serde::Serialize;
use std::path::PathBuf;

/// One detected chunk as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentReport {
    pub index: usize,
    pub offset: usize,
    pub length: usize,
    pub frames: usize,
    pub start_ms: u64,
    pub end_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl SegmentReport {
    pub fn new(index: usize, segment: &Segment<'_>, path: Option<PathBuf>) -> Self {
        Self {
            index,
            offset: segment.offset(),
            length: segment.len(),
            frames: segment.frame_count(),
            start_ms: segment.start.as_millis() as u64,
            end_ms: segment.end.as_millis() as u64,
            path,
        }
    }

    /// Single human-readable line, e.g. `chunk 00  1.230s - 4.560s  (104160 bytes)`.
    pub fn line(&self) -> String {
        let mut line = format!(
            "chunk {:02}  {}.{:03}s - {}.{:03}s  ({} bytes)",
            self.index,
            self.start_ms / 1000,
            self.start_ms % 1000,
            self.end_ms / 1000,
            self.end_ms % 1000,
            self.length
        );
        if let Some(path) = &self.path {
            line.push_str(&format!("  -> {}", path.display()));
        }
        line
    }
}

/// Serialize reports as a pretty JSON array.
pub fn to_json(reports: &[SegmentReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
