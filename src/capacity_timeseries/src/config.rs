//! Normalizer configuration: parsing, normalization, and loading.
//!
//! The configuration is a small TOML document:
//!
//! ```toml
//! reference_zone = "Europe/Luxembourg"
//! country = "de"
//! ```
//!
//! Both keys are optional and default to the values above. Normalization trims
//! both fields and lowercases the country tag.
//!
//! Entrypoints:
//! - Parse + normalize from a TOML string: [`load_config_str`]
//! - Parse + normalize from a file path: [`load_config_path`]

use anyhow::Context;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::{errors::ConfigError, tz::parse_zone};

/// Zone used to read local dates and delivery hours.
pub const DEFAULT_REFERENCE_ZONE: Tz = chrono_tz::Europe::Luxembourg;
/// Country tag attached to every batch.
pub const DEFAULT_COUNTRY: &str = "de";

/// On-disk shape of the configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// IANA zone name.
    #[serde(default = "default_zone_name")]
    pub reference_zone: String,
    /// Country tag.
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_zone_name() -> String {
    DEFAULT_REFERENCE_ZONE.name().to_string()
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

/// Validated normalizer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Zone in which dates and product hours are interpreted.
    pub reference_zone: Tz,
    /// Country tag attached to the output.
    pub country: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            reference_zone: DEFAULT_REFERENCE_ZONE,
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl TryFrom<ConfigFile> for NormalizerConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let reference_zone = parse_zone(&file.reference_zone)?;
        let country = file.country.trim().to_lowercase();
        if country.is_empty() {
            return Err(ConfigError::EmptyCountry);
        }
        Ok(Self {
            reference_zone,
            country,
        })
    }
}

/// Parse and normalize a configuration from a TOML string.
///
/// Errors:
/// - TOML parse failures (including unknown keys)
/// - Unknown zone names or an empty country tag
pub fn load_config_str(toml_str: &str) -> anyhow::Result<NormalizerConfig> {
    let file: ConfigFile = toml::from_str(toml_str).context("failed to parse config TOML")?;
    let cfg = NormalizerConfig::try_from(file).context("invalid config")?;
    tracing::debug!(zone = cfg.reference_zone.name(), country = %cfg.country, "loaded config");
    Ok(cfg)
}

/// Read a configuration file from disk, parse, and normalize it.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<NormalizerConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}
