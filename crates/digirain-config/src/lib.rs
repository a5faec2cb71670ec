//! Configuration for the digirain terminal rain.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/digirain/config.toml` on Linux). A missing file
//! means defaults; a malformed one is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use digirain_core::VariantSpec;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("could not determine a config directory")]
    NoConfigDir,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading shown above the menu.
    pub title: String,
    /// Glyph size and column stride in virtual pixels.
    pub font_size: f32,
    /// Virtual pixels per terminal cell, horizontally.
    pub cell_width: f32,
    /// Virtual pixels per terminal cell, vertically.
    pub cell_height: f32,
    /// Target frame time in milliseconds.
    pub frame_ms: u64,
    /// Opacity of the black overlay painted every frame.
    pub trail_alpha: f32,
    /// Fixed random seed; entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Rain variants, one per menu section, in menu order.
    pub variants: Vec<VariantSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "THE MATRIX".to_string(),
            font_size: 16.0,
            cell_width: 8.0,
            cell_height: 16.0,
            frame_ms: 33,
            trail_alpha: 0.05,
            seed: None,
            variants: VariantSpec::defaults(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "digirain").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing file at the default location yields defaults. A missing
    /// file that was asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => {
                    tracing::debug!("no config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.clone(),
                source,
            },
            other => other,
        })?;

        tracing::info!(path = %path.display(), variants = config.variants.len(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write this config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check ranges and key uniqueness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("font_size", self.font_size),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value >= 1.0) {
                return Err(ConfigError::Invalid(format!("{name} must be at least 1, got {value}")));
            }
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid("frame_ms must be non-zero".to_string()));
        }
        if !(0.0..=1.0).contains(&self.trail_alpha) {
            return Err(ConfigError::Invalid(format!(
                "trail_alpha must be within 0..=1, got {}",
                self.trail_alpha
            )));
        }
        if self.variants.is_empty() {
            return Err(ConfigError::Invalid("at least one variant is required".to_string()));
        }

        for (i, variant) in self.variants.iter().enumerate() {
            if variant.key.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("variant #{} has an empty key", i + 1)));
            }
            if !(variant.speed.is_finite() && variant.speed > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "variant `{}` speed must be positive",
                    variant.key
                )));
            }
            if !(0.0..=1.0).contains(&variant.density) {
                return Err(ConfigError::Invalid(format!(
                    "variant `{}` density must be within 0..=1",
                    variant.key
                )));
            }
            let duplicate = self.variants[..i]
                .iter()
                .any(|other| other.key.eq_ignore_ascii_case(&variant.key));
            if duplicate {
                return Err(ConfigError::Invalid(format!(
                    "duplicate variant key `{}`",
                    variant.key
                )));
            }
        }
        Ok(())
    }
}
