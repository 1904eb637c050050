//! Command-line parsing and validation helpers.

mod defaults;
#[cfg(test)]
mod tests;
mod validation;

use crate::audio::SplitConfig;
use crate::wav::OutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub use defaults::{
    default_vad_engine, DEFAULT_AGGRESSIVENESS, DEFAULT_VAD_THRESHOLD_DB, MAX_AGGRESSIVENESS,
    MAX_PADDING_MS, SUPPORTED_FRAME_MS,
};
use defaults::{DEFAULT_FRAME_MS, DEFAULT_PADDING_MS};

/// CLI options for the splitter. Validated values keep the segmentation run well-formed.
#[derive(Debug, Parser, Clone)]
#[command(
    about = "Split a WAV recording into voiced chunks",
    author,
    version
)]
pub struct AppConfig {
    /// Mono 16-bit WAV file to split
    pub input: PathBuf,

    /// Directory chunks are written to
    #[arg(long = "output-dir", short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Chunk output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Wav)]
    pub format: OutputFormat,

    /// How aggressively non-speech is filtered out (0 keeps the most audio, 3 the least)
    #[arg(long, short = 'a', default_value_t = DEFAULT_AGGRESSIVENESS)]
    pub aggressiveness: u8,

    /// Frame duration passed to the VAD (milliseconds)
    #[arg(long = "frame-ms", default_value_t = DEFAULT_FRAME_MS)]
    pub frame_ms: u64,

    /// Padding window span used for trigger/detrigger (milliseconds)
    #[arg(long = "padding-ms", default_value_t = DEFAULT_PADDING_MS)]
    pub padding_ms: u64,

    /// Voice activity detector implementation to use
    #[arg(long = "vad-engine", value_enum, default_value_t = default_vad_engine())]
    pub vad_engine: VadEngineKind,

    /// Energy threshold for the simple VAD (decibels)
    #[arg(long = "vad-threshold-db", default_value_t = DEFAULT_VAD_THRESHOLD_DB)]
    pub vad_threshold_db: f32,

    /// Print a JSON segment report on stdout
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,

    /// Enable trace logging to a file
    #[arg(long = "logs", env = "VADSPLIT_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs)
    #[arg(long = "no-logs", env = "VADSPLIT_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,
}

/// Available runtime-selectable VAD implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VadEngineKind {
    Earshot,
    Simple,
}

impl VadEngineKind {
    pub fn label(self) -> &'static str {
        match self {
            VadEngineKind::Earshot => "earshot",
            VadEngineKind::Simple => "simple",
        }
    }
}

impl AppConfig {
    /// Frame/padding settings for the segmentation run.
    pub fn split_config(&self) -> SplitConfig {
        SplitConfig {
            frame_duration_ms: self.frame_ms,
            padding_duration_ms: self.padding_ms,
        }
    }

    pub fn logging_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }
}
