//! Configuration management for form intake
//!
//! Layers built-in defaults, an optional `form-intake.toml` and
//! `FORM_INTAKE_*` environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::render::OutputFormat;

pub const DEFAULT_CONFIG_FILE: &str = "form-intake";
pub const ENV_PREFIX: &str = "FORM_INTAKE";

const DEFAULT_RESET_DELAY_MS: i64 = 1500;
const MAX_RESET_DELAY_MS: u64 = 60_000;

/// Session behaviour settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Delay between a successful render and the automatic form reset
    /// Environment: FORM_INTAKE_RESET_DELAY_MS
    pub reset_delay_ms: u64,

    /// Abort a pending automatic reset when a new submit or reset arrives.
    /// When false a stale timer may clear a newer result.
    /// Environment: FORM_INTAKE_CANCEL_PENDING_RESET
    pub cancel_pending_reset: bool,

    /// `html` or `text`
    /// Environment: FORM_INTAKE_OUTPUT_FORMAT
    pub output_format: OutputFormat,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: DEFAULT_RESET_DELAY_MS as u64,
            cancel_pending_reset: true,
            output_format: OutputFormat::Html,
        }
    }
}

impl IntakeConfig {
    /// Load configuration from form-intake.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from the named file (extension optional, file optional)
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("reset_delay_ms", DEFAULT_RESET_DELAY_MS)?
            .set_default("cancel_pending_reset", true)?
            .set_default("output_format", "html")?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: IntakeConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.reset_delay_ms == 0 {
            return Err(config::ConfigError::Message(
                "reset_delay_ms must be greater than 0".into(),
            ));
        }

        if self.reset_delay_ms > MAX_RESET_DELAY_MS {
            return Err(config::ConfigError::Message(format!(
                "reset_delay_ms cannot exceed {} ms",
                MAX_RESET_DELAY_MS
            )));
        }

        Ok(())
    }

    /// Get reset delay as Duration
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}
