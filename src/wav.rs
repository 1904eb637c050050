//! Reading source audio and writing detected chunks.

use crate::audio::{pcm_samples, Segment, BYTES_PER_SAMPLE};
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::fs;
use std::path::{Path, PathBuf};

/// Mono 16-bit little-endian PCM held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmAudio {
    pub sample_rate: u32,
    pub bytes: Vec<u8>,
}

impl PcmAudio {
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        let samples = (self.bytes.len() / BYTES_PER_SAMPLE) as u64;
        samples * 1000 / u64::from(self.sample_rate)
    }
}

/// How detected chunks are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw PCM bytes
    Pcm,
    /// WAV container
    Wav,
    /// Do not write files
    None,
}

impl OutputFormat {
    pub fn extension(self) -> Option<&'static str> {
        match self {
            OutputFormat::Pcm => Some("pcm"),
            OutputFormat::Wav => Some("wav"),
            OutputFormat::None => None,
        }
    }
}

fn mono16_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Load a mono 16-bit WAV file.
pub fn read_wav(path: &Path) -> Result<PcmAudio> {
    let mut reader =
        WavReader::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let spec = reader.spec();
    if spec.channels != 1 || spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int
    {
        bail!(
            "{}: expected mono 16-bit PCM, got {}ch {}bit {:?}",
            path.display(),
            spec.channels,
            spec.bits_per_sample,
            spec.sample_format
        );
    }
    let mut bytes = Vec::with_capacity(reader.len() as usize * BYTES_PER_SAMPLE);
    for sample in reader.samples::<i16>() {
        let sample = sample.with_context(|| format!("failed to decode {}", path.display()))?;
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    Ok(PcmAudio {
        sample_rate: spec.sample_rate,
        bytes,
    })
}

/// Write raw PCM bytes as a mono 16-bit WAV file.
pub fn write_wav(path: &Path, pcm: &[u8], sample_rate: u32) -> Result<()> {
    let mut writer = WavWriter::create(path, mono16_spec(sample_rate))
        .with_context(|| format!("failed to create {}", path.display()))?;
    for sample in pcm_samples(pcm) {
        writer.write_sample(sample)?;
    }
    writer
        .finalize()
        .with_context(|| format!("failed to finalize {}", path.display()))?;
    Ok(())
}

/// Path of the `index`-th chunk, e.g. `chunk-03.wav`.
pub fn chunk_path(dir: &Path, index: usize, format: OutputFormat) -> Option<PathBuf> {
    let extension = format.extension()?;
    Some(dir.join(format!("chunk-{index:02}.{extension}")))
}

/// Write one segment. Returns the written path, or `None` for [`OutputFormat::None`].
pub fn write_segment(
    dir: &Path,
    index: usize,
    segment: &Segment<'_>,
    sample_rate: u32,
    format: OutputFormat,
) -> Result<Option<PathBuf>> {
    let Some(path) = chunk_path(dir, index, format) else {
        return Ok(None);
    };
    match format {
        OutputFormat::Pcm => fs::write(&path, segment.bytes())
            .with_context(|| format!("failed to write {}", path.display()))?,
        OutputFormat::Wav => write_wav(&path, segment.bytes(), sample_rate)?,
        OutputFormat::None => return Ok(None),
    }
    Ok(Some(path))
}
