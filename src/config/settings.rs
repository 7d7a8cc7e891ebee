//! Application configuration

use anyhow::{ensure, Context, Result};
use clap::ValueEnum;
use latency_numbers_core::{RevealScheduler, BOX_SIZE_PX, GRID_COLUMNS, REVEAL_OVERLAP, STEP_DURATION};
use latency_numbers_render::{GridGeometry, DEFAULT_MAX_BOXES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Longest accepted step between reveals (one hour)
pub const MAX_STEP_DURATION_MS: u64 = 3_600_000;

/// Largest accepted reveal overlap factor
pub const MAX_OVERLAP: f64 = 10.0;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Reveal timing
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Box grid geometry
    #[serde(default)]
    pub grid: GridConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl AppConfig {
    /// Load configuration from disk, or defaults when no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "latency-numbers", "latency-numbers")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        self.animation.validate()
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            animation: AnimationConfig::default(),
            grid: GridConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Reveal timing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Step between reveals in milliseconds; also the page's `--stepTime`
    #[serde(default = "default_step_duration_ms")]
    pub step_duration_ms: u64,
    /// Fraction of a step after which the next reveal starts
    #[serde(default = "default_overlap")]
    pub overlap: f64,
}

fn default_step_duration_ms() -> u64 {
    STEP_DURATION.as_millis() as u64
}

fn default_overlap() -> f64 {
    REVEAL_OVERLAP
}

impl AnimationConfig {
    /// Keep every reveal offset representable as a timer deadline
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.step_duration_ms <= MAX_STEP_DURATION_MS,
            "animation.step_duration_ms must be at most {}, got {}",
            MAX_STEP_DURATION_MS,
            self.step_duration_ms
        );
        ensure!(
            self.overlap.is_finite() && (0.0..=MAX_OVERLAP).contains(&self.overlap),
            "animation.overlap must be between 0 and {}, got {}",
            MAX_OVERLAP,
            self.overlap
        );
        Ok(())
    }

    pub fn step_duration(&self) -> Duration {
        Duration::from_millis(self.step_duration_ms)
    }

    pub fn scheduler(&self) -> RevealScheduler {
        RevealScheduler::new(self.step_duration(), self.overlap)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_duration_ms: default_step_duration_ms(),
            overlap: default_overlap(),
        }
    }
}

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    #[serde(default = "default_columns")]
    pub columns: u32,
    /// Box edge length in pixels
    #[serde(default = "default_box_size")]
    pub box_size: f64,
    #[serde(default = "default_max_boxes")]
    pub max_boxes: usize,
}

fn default_columns() -> u32 {
    GRID_COLUMNS
}

fn default_box_size() -> f64 {
    BOX_SIZE_PX
}

fn default_max_boxes() -> usize {
    DEFAULT_MAX_BOXES
}

impl GridConfig {
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry {
            columns: self.columns,
            box_size: self.box_size,
            max_boxes: self.max_boxes,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            box_size: default_box_size(),
            max_boxes: default_max_boxes(),
        }
    }
}

/// Output format of a render pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Captions in the terminal
    #[default]
    Text,
    /// Metrics and reveal events as JSON
    Json,
    /// Self-contained animated HTML page
    Html,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}
