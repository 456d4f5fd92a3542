//! Configuration and settings management for PlanMark
//!
//! Settings live in one file under the platform config directory, encoded as
//! TOML or JSON depending on the extension. Sections:
//! - Designer settings (grid step, history depth, defaults)
//! - Export page geometry
//! - Logging level and output format

use planmark_core::{Classification, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest accepted undo/redo depth. Every entry is a full snapshot of the
/// placed items.
pub const MAX_HISTORY_LIMIT: usize = 10_000;

/// Designer engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    /// Snap step in percent of the canvas (2.0 gives 50 grid lines per axis)
    pub grid_step: f64,
    /// Maximum depth of each of the undo and redo stacks
    pub history_limit: usize,
    /// Classification loaded for new layouts
    pub default_classification: Classification,
    /// Whether new layouts start with snap-to-grid enabled
    pub snap_to_grid: bool,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            grid_step: 2.0,
            history_limit: 100,
            default_classification: Classification::LowVoltage,
            snap_to_grid: false,
        }
    }
}

/// Export page geometry, in points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub page_width: f64,
    pub page_height: f64,
    /// Blank border kept on every side of the page
    pub margin: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        // A4 landscape
        Self {
            page_width: 842.0,
            page_height: 595.0,
            margin: 0.0,
        }
    }
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Application configuration, one field per section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub designer: DesignerSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// Defaults for every section
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/planmark/config.toml`)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("planmark")
            .join("config.toml")
    }

    /// Load and validate a config file. The format follows the extension.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::for_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::other(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let config = format.decode(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when `path` does not exist, otherwise [`Config::load_from_file`]
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Validate and write the config, creating parent directories as needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let text = ConfigFormat::for_path(path)?.encode(self)?;

        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)?,
            _ => {}
        }
        std::fs::write(path, text).map_err(|e| {
            Error::other(format!("Cannot write {}: {}", path.display(), e))
        })
    }

    /// Reject values the designer cannot work with
    pub fn validate(&self) -> Result<()> {
        let step = self.designer.grid_step;
        if !step.is_finite() || step <= 0.0 || step > 100.0 {
            return Err(Error::other(format!(
                "Grid step must be in (0, 100], got {}",
                step
            )));
        }

        let limit = self.designer.history_limit;
        if limit == 0 || limit > MAX_HISTORY_LIMIT {
            return Err(Error::other(format!(
                "History limit must be in 1..={}, got {}",
                MAX_HISTORY_LIMIT, limit
            )));
        }

        let export = &self.export;
        if export.page_width <= 0.0 || export.page_height <= 0.0 {
            return Err(Error::other("Page dimensions must be > 0".to_string()));
        }

        if export.margin < 0.0
            || export.margin * 2.0 >= export.page_width
            || export.margin * 2.0 >= export.page_height
        {
            return Err(Error::other(
                "Page margin leaves no drawable area".to_string(),
            ));
        }

        Ok(())
    }
}

/// On-disk config encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(Error::other(format!(
                "Unsupported config file {} (expected .json or .toml)",
                path.display()
            ))),
        }
    }

    fn decode(self, text: &str) -> Result<Config> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Toml => toml::from_str(text)
                .map_err(|e| Error::other(format!("Malformed TOML config: {}", e))),
        }
    }

    fn encode(self, config: &Config) -> Result<String> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(config)?),
            Self::Toml => toml::to_string_pretty(config)
                .map_err(|e| Error::other(format!("Cannot encode config: {}", e))),
        }
    }
}
