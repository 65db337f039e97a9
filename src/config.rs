//! Application configuration.
//!
//! Stored in TOML at `~/.config/termfolio/config.toml` (or XDG equivalent).
//! Every field has a default and a missing file is not an error, so the
//! binary runs with no setup at all. Command-line flags override file values.
//!
//! # Example Configuration
//!
//! ```toml
//! theme = "high-contrast"
//! tick_rate_ms = 16
//! start_page = "projects"
//! content = "/home/iris/portfolio.toml"
//!
//! [guard]
//! enabled = false
//!
//! [log]
//! file = "/tmp/termfolio.log"
//! filter = "termfolio=debug"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::ui::components::theme::ThemePreset;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Frame cadence used when the config and CLI are silent.
pub const DEFAULT_TICK_MS: u64 = 33;

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color theme preset.
    pub theme: ThemePreset,

    /// Milliseconds between animation ticks.
    pub tick_rate_ms: u64,

    /// Page to open on startup; the first page when unset.
    pub start_page: Option<String>,

    /// Portfolio content file; the built-in portfolio when unset.
    pub content: Option<PathBuf>,

    pub guard: GuardConfig,

    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemePreset::default(),
            tick_rate_ms: DEFAULT_TICK_MS,
            start_page: None,
            content: None,
            guard: GuardConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Input deterrents (right-click, inspect chords, screenshot response).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub enabled: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Log destination and filter. Logging goes to a file because stdout and
/// stderr belong to the alternate screen while the interface runs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file path; defaults to a dated file in the state directory.
    pub file: Option<PathBuf>,

    /// Tracing filter directive, e.g. `termfolio=debug`.
    pub filter: Option<String>,
}

impl Config {
    /// Load configuration from the default location. A missing file yields
    /// the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Default configuration file path.
    ///
    /// Uses XDG conventions:
    /// - Primary: `$XDG_CONFIG_HOME/termfolio/config.toml`
    /// - Fallback: platform config dir (e.g. `~/.config/termfolio/config.toml`)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(xdg_config) = dotenvy::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config)
                .join("termfolio")
                .join("config.toml"));
        }

        dirs::config_dir()
            .map(|p| p.join("termfolio").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(10..=1000).contains(&self.tick_rate_ms) {
            return Err(ConfigError::Validation(format!(
                "tick_rate_ms must be between 10 and 1000, got {}",
                self.tick_rate_ms
            )));
        }

        if let Some(page) = self.start_page.as_deref()
            && page.is_empty()
        {
            return Err(ConfigError::Validation(
                "start_page cannot be empty".into(),
            ));
        }

        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
