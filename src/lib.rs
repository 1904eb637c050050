pub mod audio;
pub mod config;
pub mod report;
mod telemetry;
#[cfg(feature = "vad_earshot")]
pub mod vad_earshot;
pub mod wav;

pub use audio::{split_pcm, Segment, SplitConfig, VadEngine};
pub use telemetry::{init_tracing, tracing_log_path};
