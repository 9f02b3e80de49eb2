// src/config.rs

//! Defines the configuration structures for `gridcode`.
//!
//! Settings are grouped by concern and can be deserialized from a JSON file
//! placed next to the binary. Every field has a default, so a partial file
//! (or no file at all) yields a fully usable configuration. Defaults match
//! the tool's historical hardcoded parameters.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Configuration file looked for in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "gridcode.json";

/// Loaded configuration, read once on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

/// Complete configuration for the tool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Input/output file locations.
    pub files: FilesConfig,
    /// Random grid generation settings.
    pub generator: GeneratorConfig,
    /// Raster output settings.
    pub render: RenderConfig,
}

/// File locations used by the encode and decode pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Where the encoded stream is written and read back.
    pub encoded_path: PathBuf,
    /// Where the decoded grid's PNG raster is written.
    pub image_path: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            encoded_path: PathBuf::from("encoded_grid.txt"),
            image_path: PathBuf::from("decoded_grid.png"),
        }
    }
}

/// Random grid generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Probability that a generated cell is active.
    pub density: f64,
    /// Fixed RNG seed. When absent the generator seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            density: 0.4,
            seed: None,
        }
    }
}

/// Raster output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Integer upscaling factor; each cell becomes a scale x scale block.
    pub scale: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig { scale: 1 }
    }
}

impl Config {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Loads [`DEFAULT_CONFIG_PATH`] if present, falling back to defaults
    /// (with a warning) when the file is missing or malformed.
    pub fn load_or_default() -> Config {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if !path.exists() {
            debug!("no config file at {}; using defaults", path.display());
            return Config::default();
        }
        match Config::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{:#}; using defaults", err);
                Config::default()
            }
        }
    }
}
