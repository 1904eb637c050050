use super::{default_vad_engine, AppConfig, VadEngineKind};
use crate::wav::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> AppConfig {
    let mut argv = vec!["test-app", "input.wav"];
    argv.extend_from_slice(args);
    AppConfig::parse_from(argv)
}

#[test]
fn defaults_match_documented_values() {
    let cfg = parse(&[]);
    assert_eq!(cfg.input, PathBuf::from("input.wav"));
    assert_eq!(cfg.output_dir, PathBuf::from("."));
    assert_eq!(cfg.format, OutputFormat::Wav);
    assert_eq!(cfg.aggressiveness, 2);
    assert_eq!(cfg.frame_ms, 30);
    assert_eq!(cfg.padding_ms, 300);
    assert_eq!(cfg.vad_engine, default_vad_engine());
    assert!(!cfg.json);
    assert!(cfg.validate().is_ok());
}

#[test]
fn split_config_mirrors_flags() {
    let cfg = parse(&["--frame-ms", "20", "--padding-ms", "200"]);
    let split = cfg.split_config();
    assert_eq!(split.frame_duration_ms, 20);
    assert_eq!(split.padding_duration_ms, 200);
    assert_eq!(split.window_frames(), 10);
}

#[test]
fn rejects_aggressiveness_out_of_bounds() {
    assert!(parse(&["--aggressiveness", "4"]).validate().is_err());
    assert!(parse(&["-a", "3"]).validate().is_ok());
    assert!(parse(&["-a", "0"]).validate().is_ok());
}

#[test]
fn rejects_unsupported_frame_duration() {
    assert!(parse(&["--frame-ms", "25"]).validate().is_err());
    assert!(parse(&["--frame-ms", "0"]).validate().is_err());
    assert!(parse(&["--frame-ms", "10"]).validate().is_ok());
}

#[test]
fn rejects_padding_shorter_than_one_frame() {
    let err = parse(&["--padding-ms", "20"]).validate().unwrap_err();
    assert!(err.to_string().contains("--padding-ms"));
    assert!(parse(&["--padding-ms", "30"]).validate().is_ok());
}

#[test]
fn rejects_padding_above_limit() {
    assert!(parse(&["--padding-ms", "10001"]).validate().is_err());
    assert!(parse(&["--padding-ms", "10000"]).validate().is_ok());
}

#[test]
fn rejects_threshold_out_of_range() {
    assert!(parse(&["--vad-threshold-db", "5"]).validate().is_err());
    assert!(parse(&["--vad-threshold-db=-121"]).validate().is_err());
    assert!(parse(&["--vad-threshold-db=-60"]).validate().is_ok());
}

#[test]
fn parses_output_formats_and_engines() {
    assert_eq!(parse(&["--format", "pcm"]).format, OutputFormat::Pcm);
    assert_eq!(parse(&["--format", "none"]).format, OutputFormat::None);
    assert_eq!(
        parse(&["--vad-engine", "simple"]).vad_engine,
        VadEngineKind::Simple
    );
    assert!(AppConfig::try_parse_from(["test-app", "in.wav", "--format", "mp3"]).is_err());
}

#[test]
fn requires_input_path() {
    assert!(AppConfig::try_parse_from(["test-app"]).is_err());
}

#[test]
fn no_logs_overrides_logs() {
    assert!(parse(&["--logs"]).logging_enabled());
    assert!(!parse(&["--logs", "--no-logs"]).logging_enabled());
    assert!(!parse(&[]).logging_enabled());
}

#[test]
fn engine_labels_are_stable() {
    assert_eq!(VadEngineKind::Earshot.label(), "earshot");
    assert_eq!(VadEngineKind::Simple.label(), "simple");
}
