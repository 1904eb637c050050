use crate::config::AppConfig;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Target prefix shared by the library and the `vadsplit` binary.
const CRATE_TARGET: &str = "vadsplit";

/// JSONL trace file; `VADSPLIT_TRACE_LOG` overrides the temp-dir default.
pub fn tracing_log_path() -> PathBuf {
    env::var("VADSPLIT_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("vadsplit_trace.jsonl"))
}

/// Parses a `VADSPLIT_TRACE_LEVEL` value, falling back to DEBUG.
fn parse_trace_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(Level::DEBUG)
}

/// Keeps this crate's events at `level`; dependencies only surface warnings.
fn trace_targets(level: Level) -> Targets {
    Targets::new()
        .with_target(CRATE_TARGET, level)
        .with_default(Level::WARN)
}

/// Install the global JSON subscriber once, if logging is enabled.
pub fn init_tracing(config: &AppConfig) {
    if !config.logging_enabled() {
        return;
    }

    let _ = TRACING_INIT.get_or_init(|| {
        let path = tracing_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let level = parse_trace_level(env::var("VADSPLIT_TRACE_LEVEL").ok().as_deref());
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(Level::TRACE)
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish()
            .with(trace_targets(level));
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_level_defaults_to_debug() {
        assert_eq!(parse_trace_level(None), Level::DEBUG);
        assert_eq!(parse_trace_level(Some("bogus")), Level::DEBUG);
        assert_eq!(parse_trace_level(Some(" info ")), Level::INFO);
        assert_eq!(parse_trace_level(Some("TRACE")), Level::TRACE);
    }

    #[test]
    fn targets_keep_crate_events_and_mute_dependencies() {
        let targets = trace_targets(Level::DEBUG);
        assert!(targets.would_enable("vadsplit::audio::collector", &Level::DEBUG));
        assert!(targets.would_enable("vadsplit", &Level::INFO));
        assert!(!targets.would_enable("vadsplit::audio::collector", &Level::TRACE));
        assert!(!targets.would_enable("hound", &Level::DEBUG));
        assert!(targets.would_enable("hound", &Level::WARN));
    }

    #[test]
    fn targets_honor_requested_level() {
        let targets = trace_targets(Level::INFO);
        assert!(targets.would_enable("vadsplit::audio::split", &Level::INFO));
        assert!(!targets.would_enable("vadsplit::audio::collector", &Level::DEBUG));
    }
}
