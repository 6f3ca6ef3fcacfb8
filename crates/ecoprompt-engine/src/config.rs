// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration for ecoprompt

use crate::error::{EngineError, Result};
use crate::impact::ImpactOptions;
use crate::profile::ProfileName;
use crate::tokens::PromptType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub display: DisplayConfig,
}

/// Defaults applied to every calculation unless overridden per call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub output_type: PromptType,
    pub profile: ProfileName,
    pub custom_output_tokens: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub units: Units,
    /// Highest acceptable eco score for `check`
    pub eco_threshold: u8,
}

/// Distance units for the driving analogy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            units: Units::Metric,
            // Upper bound of the "Fair" rating
            eco_threshold: 60,
        }
    }
}

impl Config {
    pub fn impact_options(&self) -> ImpactOptions {
        ImpactOptions {
            output_type: self.defaults.output_type,
            profile: self.defaults.profile,
            custom_output_tokens: self.defaults.custom_output_tokens,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ecoprompt")
        .join("config.toml")
}

/// Serialization chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Yaml,
}

fn config_format(path: &Path) -> Result<ConfigFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => Ok(ConfigFormat::Toml),
        Some("yml" | "yaml") => Ok(ConfigFormat::Yaml),
        other => Err(EngineError::Config(format!(
            "unsupported config extension {:?} for {}",
            other.unwrap_or(""),
            path.display()
        ))),
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let format = config_format(path)?;
    info!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;

    let config = match format {
        ConfigFormat::Toml => toml::from_str(&content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(&content)?,
    };
    Ok(config)
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    let format = config_format(path)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = match format {
        ConfigFormat::Toml => toml::to_string_pretty(&config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(&config)?,
    };

    std::fs::write(path, content)?;
    Ok(())
}
