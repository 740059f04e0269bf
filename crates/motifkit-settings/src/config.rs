//! Configuration for MotifKit rendering
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML files, chosen by file extension.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (size, fitting to content)
//! - Style settings (stroke and fill)
//! - Output settings (file path, random seed)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width; derived from the scene when unset
    pub width: Option<f64>,
    /// Canvas height; derived from the scene when unset
    pub height: Option<f64>,
    /// Size the canvas to the bounds of the drawn shapes
    pub fit_to_content: bool,
    /// Empty border kept around the content when fitting
    pub margin: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            fit_to_content: false,
            margin: 10.0,
        }
    }
}

/// Stroke and fill used for every shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub fill_color: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            stroke_color: "black".to_string(),
            stroke_width: 2.0,
            fill_color: "white".to_string(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Destination SVG file
    pub path: PathBuf,
    /// Seed for the random petal styles; entropy when unset
    pub seed: Option<u64>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("motifkit.svg"),
            seed: None,
        }
    }
}

/// Complete render configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasSettings,
    pub style: StyleSettings,
    pub output: OutputSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn check_color(key: &str, value: &str) -> SettingsResult<()> {
    if value.trim().is_empty() {
        return Err(SettingsError::invalid(key, "must not be empty"));
    }
    if value.chars().any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '&')) {
        return Err(SettingsError::invalid(key, "contains reserved characters"));
    }
    Ok(())
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Config = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded settings");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if let Some(width) = self.canvas.width {
            if !positive(width) {
                return Err(SettingsError::invalid("canvas.width", "must be > 0"));
            }
        }
        if let Some(height) = self.canvas.height {
            if !positive(height) {
                return Err(SettingsError::invalid("canvas.height", "must be > 0"));
            }
        }
        if !self.canvas.margin.is_finite() || self.canvas.margin < 0.0 {
            return Err(SettingsError::invalid("canvas.margin", "must be >= 0"));
        }

        if !positive(self.style.stroke_width) {
            return Err(SettingsError::invalid("style.stroke_width", "must be > 0"));
        }
        check_color("style.stroke_color", &self.style.stroke_color)?;
        check_color("style.fill_color", &self.style.fill_color)?;

        if self.output.path.as_os_str().is_empty() {
            return Err(SettingsError::invalid("output.path", "must not be empty"));
        }

        Ok(())
    }
}
