//! Configuration management for the wheel
//!
//! This module handles loading and saving user configuration: the segments
//! on the wheel, spin timing, the active palette, and the export location.

pub mod theme_config;

use crate::segment::{Segment, default_segments};
use crate::spin::SpinConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub use theme_config::ThemeConfig;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Spin timing, shared by the animation and the completion timer
    #[serde(default)]
    pub spin: SpinConfig,

    /// SVG export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Wheel segments, in clockwise order starting under the pointer
    #[serde(default = "default_segments")]
    pub segments: Vec<Segment>,
}

/// SVG export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Where the `e` key writes the current wheel
    #[serde(default = "default_export_path")]
    pub path: PathBuf,
}

fn default_export_path() -> PathBuf {
    PathBuf::from("prizewheel.svg")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = directories::ProjectDirs::from("", "", "prizewheel")
            .context("Unable to determine config directory")?
            .config_dir()
            .to_path_buf();

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from disk, or return defaults if the file is missing or invalid
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => {
                if path.exists() {
                    match Self::load_from(&path) {
                        Ok(config) => config,
                        Err(e) => {
                            warn!("Failed to load config, using defaults: {:#}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(e) => {
                warn!("Could not determine config path: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(content)?;
        if config.segments.is_empty() {
            warn!("Config has no segments; the wheel will be empty");
        }
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path` as pretty TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            spin: SpinConfig::default(),
            export: ExportConfig::default(),
            segments: default_segments(),
        }
    }
}
