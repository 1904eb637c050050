//! vadsplit entrypoint: load a WAV file, split it on voice activity, write chunks.
//!
//! The whole file is processed in one synchronous pass. Chunks are written only
//! after segmentation succeeds, so a rejected frame leaves no partial output.

use anyhow::{Context, Result};
use std::fs;
use std::process::ExitCode;
use tracing::info;
use vadsplit::audio::{SimpleThresholdVad, VadEngine};
use vadsplit::config::{AppConfig, VadEngineKind};
use vadsplit::report::{to_json, SegmentReport};
use vadsplit::wav::{read_wav, write_segment, OutputFormat};
use vadsplit::{init_tracing, split_pcm};

fn build_vad(config: &AppConfig) -> Result<Box<dyn VadEngine>> {
    match config.vad_engine {
        #[cfg(feature = "vad_earshot")]
        VadEngineKind::Earshot => Ok(Box::new(vadsplit::vad_earshot::EarshotVad::new(
            config.aggressiveness,
        )?)),
        #[cfg(not(feature = "vad_earshot"))]
        VadEngineKind::Earshot => {
            anyhow::bail!("--vad-engine earshot requires building with the 'vad_earshot' feature")
        }
        VadEngineKind::Simple => Ok(Box::new(SimpleThresholdVad::new(config.vad_threshold_db))),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = AppConfig::parse_args()?;
    init_tracing(&config);

    let audio = read_wav(&config.input)?;
    info!(
        input = %config.input.display(),
        sample_rate = audio.sample_rate,
        duration_ms = audio.duration_ms(),
        "loaded audio"
    );

    let mut vad = build_vad(&config)?;
    let segments = split_pcm(
        &audio.bytes,
        audio.sample_rate,
        &config.split_config(),
        vad.as_mut(),
    )
    .with_context(|| format!("failed to split {}", config.input.display()))?;

    if config.format != OutputFormat::None {
        fs::create_dir_all(&config.output_dir).with_context(|| {
            format!("failed to create {}", config.output_dir.display())
        })?;
    }

    let mut reports = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        let path = write_segment(
            &config.output_dir,
            index,
            segment,
            audio.sample_rate,
            config.format,
        )?;
        reports.push(SegmentReport::new(index, segment, path));
    }

    if config.json {
        println!("{}", to_json(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.line());
        }
        println!(
            "{} voiced chunk(s) found by {} in {}",
            reports.len(),
            config.vad_engine.label(),
            config.input.display()
        );
    }
    Ok(())
}
