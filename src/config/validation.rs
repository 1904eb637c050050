use super::defaults::{MAX_AGGRESSIVENESS, MAX_PADDING_MS, SUPPORTED_FRAME_MS};
use super::AppConfig;
use anyhow::{bail, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values before any audio is loaded.
    pub fn validate(&self) -> Result<()> {
        if self.aggressiveness > MAX_AGGRESSIVENESS {
            bail!(
                "--aggressiveness must be between 0 and {MAX_AGGRESSIVENESS}, got {}",
                self.aggressiveness
            );
        }
        if !SUPPORTED_FRAME_MS.contains(&self.frame_ms) {
            bail!(
                "--frame-ms must be one of {SUPPORTED_FRAME_MS:?}, got {}",
                self.frame_ms
            );
        }
        if self.padding_ms < self.frame_ms || self.padding_ms > MAX_PADDING_MS {
            bail!(
                "--padding-ms must be between --frame-ms ({}) and {MAX_PADDING_MS}, got {}",
                self.frame_ms,
                self.padding_ms
            );
        }
        if !(-120.0..=0.0).contains(&self.vad_threshold_db) {
            bail!(
                "--vad-threshold-db must be between -120.0 and 0.0 dB, got {}",
                self.vad_threshold_db
            );
        }

        #[cfg(not(feature = "vad_earshot"))]
        if matches!(self.vad_engine, super::VadEngineKind::Earshot) {
            bail!("--vad-engine earshot requires building with the 'vad_earshot' feature");
        }

        self.split_config().validate()
    }
}
