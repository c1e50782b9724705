//! Configuration loading and typed config structures for the Solstice
//! simulation.
//!
//! The canonical configuration lives in `solstice-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure and provides a loader that reads the file. Parsing
//! is permissive (every field has a default); range validation happens
//! once, in [`Clock::new`], so an invalid day length fails fast at
//! construction rather than silently defaulting.
//!
//! [`Clock::new`]: crate::clock::Clock::new

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `solstice-config.yaml`. All fields have
/// defaults, so an empty file yields a runnable configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Calendar and day-cycle settings.
    #[serde(default)]
    pub time: TimeConfig,

    /// Frame-driver settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Calendar and day-cycle configuration.
///
/// These values are supplied once at construction and treated as
/// immutable for the clock's lifetime.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeConfig {
    /// Real-time seconds that one in-game day lasts. Must be positive.
    #[serde(default = "default_seconds_per_day")]
    pub seconds_per_day: f64,

    /// Hour at which the calendar day rolls over (not necessarily
    /// midnight), 0-23.
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u8,

    /// Number of days in each season. Must be at least 1.
    #[serde(default = "default_days_per_season")]
    pub days_per_season: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            seconds_per_day: default_seconds_per_day(),
            day_start_hour: default_day_start_hour(),
            days_per_season: default_days_per_season(),
        }
    }
}

/// Frame-driver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Milliseconds between frames of the real-time driver loop.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Multiplier applied to wall-clock deltas before advancing the
    /// clock. 1.0 runs the day cycle in real time.
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,

    /// Stop after this many day rollovers (0 = unlimited).
    #[serde(default)]
    pub max_days: u32,

    /// Stop after this many wall-clock seconds (0 = unlimited).
    #[serde(default)]
    pub max_real_time_seconds: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            time_scale: default_time_scale(),
            max_days: 0,
            max_real_time_seconds: 0,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_seconds_per_day() -> f64 {
    1200.0
}

const fn default_day_start_hour() -> u8 {
    6
}

const fn default_days_per_season() -> u32 {
    30
}

const fn default_frame_interval_ms() -> u64 {
    50
}

const fn default_time_scale() -> f64 {
    1.0
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.time.seconds_per_day, 1200.0);
        assert_eq!(config.time.day_start_hour, 6);
        assert_eq!(config.time.days_per_season, 30);
        assert_eq!(config.engine.frame_interval_ms, 50);
        assert_eq!(config.engine.max_days, 0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
time:
  seconds_per_day: 600.0
  day_start_hour: 7
  days_per_season: 28

engine:
  frame_interval_ms: 16
  time_scale: 2.5
  max_days: 4
  max_real_time_seconds: 120

logging:
  level: debug
";
        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.time.seconds_per_day, 600.0);
        assert_eq!(config.time.day_start_hour, 7);
        assert_eq!(config.time.days_per_season, 28);
        assert_eq!(config.engine.frame_interval_ms, 16);
        assert_eq!(config.engine.time_scale, 2.5);
        assert_eq!(config.engine.max_days, 4);
        assert_eq!(config.engine.max_real_time_seconds, 120);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "time:\n  day_start_hour: 0\n";
        let config = SimulationConfig::parse(yaml).unwrap();

        // Day start is overridden
        assert_eq!(config.time.day_start_hour, 0);
        // Everything else uses defaults
        assert_eq!(config.time.seconds_per_day, 1200.0);
        assert_eq!(config.time.days_per_season, 30);
    }

    #[test]
    fn parse_empty_yaml() {
        let config = SimulationConfig::parse("");
        assert!(config.is_ok());
    }

    #[test]
    fn parse_garbage_fails() {
        let config = SimulationConfig::parse("time: [not, a, map]");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("solstice-config.yaml");
        if path.exists() {
            let config = SimulationConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
