use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// File read when no `--config` is given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "gabbai.toml";

/// Top-level gabbai configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GabbaiConfig {
    /// Weekly reading settings.
    #[serde(default)]
    pub parasha: ParashaToml,

    /// Yahrzeit observance settings.
    #[serde(default)]
    pub yahrzeit: YahrzeitToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParashaToml {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ParashaToml {
    fn default() -> Self {
        Self {
            location: default_location(),
            language: default_language(),
        }
    }
}

fn default_location() -> String {
    "diaspora".to_string()
}
fn default_language() -> String {
    "english".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YahrzeitToml {
    /// Which Adar of a leap year observes a death in a common year's Adar.
    #[serde(default = "default_leap_adar")]
    pub leap_adar: String,
    /// How 30 Adar I is observed in a common year.
    #[serde(default = "default_adar_i_thirtieth")]
    pub adar_i_thirtieth: String,
}

impl Default for YahrzeitToml {
    fn default() -> Self {
        Self {
            leap_adar: default_leap_adar(),
            adar_i_thirtieth: default_adar_i_thirtieth(),
        }
    }
}

fn default_leap_adar() -> String {
    "adar-i".to_string()
}
fn default_adar_i_thirtieth() -> String {
    "clamp".to_string()
}

impl GabbaiConfig {
    /// Parses a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// Loads the explicit config file, or `gabbai.toml` in the working
    /// directory if present, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
