//! Configuration file support for Chaos Kit.
//!
//! Holds user preferences and the starting state of each tool. Wheel
//! options added at runtime are never written back.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ITEMS, MAX_ANIMATION_SPEED, MAX_ITEMS};
use crate::dice::DieType;
use crate::sanitizer::sanitize;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Chaos Wheel settings
    #[serde(default)]
    pub wheel: WheelConfig,

    /// Die roller settings
    #[serde(default)]
    pub dice: DiceConfig,
}

fn default_app_name() -> String {
    "Chaos Kit".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Multiplier for animation waits; 0 settles immediately
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f32,

    /// Fixed RNG seed for reproducible sessions
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_animation_speed() -> f32 {
    1.0
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            animation_speed: default_animation_speed(),
            seed: None,
        }
    }
}

/// Chaos Wheel section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Options a new wheel starts with
    #[serde(default = "default_initial_items")]
    pub initial_items: Vec<String>,
}

fn default_initial_items() -> Vec<String> {
    DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            initial_items: default_initial_items(),
        }
    }
}

impl WheelConfig {
    /// Sanitize the configured options, drop empty ones and cap the count.
    pub fn normalize(&mut self) {
        let before = self.initial_items.len();
        self.initial_items = self
            .initial_items
            .iter()
            .map(|s| sanitize(s))
            .filter(|s| !s.is_empty())
            .take(MAX_ITEMS)
            .collect();
        if self.initial_items.len() != before {
            log::warn!(
                "Dropped {} configured wheel options",
                before - self.initial_items.len()
            );
        }
    }
}

/// Die roller section of the config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Die selected at startup
    #[serde(default)]
    pub default_die: DieType,
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
            wheel: WheelConfig::default(),
            dice: DiceConfig::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.wheel.normalize();
        let speed = config.preferences.animation_speed;
        if !(0.0..=MAX_ANIMATION_SPEED).contains(&speed) {
            log::warn!("Invalid animation speed {}, using default", speed);
            config.preferences.animation_speed = default_animation_speed();
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "chaoskit-config.json"
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("chaoskit").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("chaoskit")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from the default path, writing a default file
    /// there on first run.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_create_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_create(&path),
            None => {
                log::warn!("Could not determine config directory, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from `path`. If no file exists yet, the defaults
    /// are written there. An unreadable file is left untouched.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_from_path(path).unwrap_or_default();
        }

        let config = Self::default();
        if let Err(e) = config.save_to_path(path) {
            log::warn!("Failed to write default config {:?}: {}", path, e);
        }
        config
    }

    /// Try to load configuration from a specific file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Option<Self> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Save configuration to a specific file, creating parent directories.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
