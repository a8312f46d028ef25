//! Lab configuration
//!
//! Settings are read from a TOML file: either the path given with `--config`
//! or `dsa-lab.toml` in the current directory when it exists. Every section
//! falls back to built-in defaults, so an empty file is a valid config.
//!
//! ```toml
//! [run]
//! interval_ms = 800
//! animation_ms = 600
//!
//! [limits]
//! queue_capacity = 8
//! stack_capacity = 8
//! bracket_stack_capacity = 8
//! circular_queue_capacity = 5
//! max_array_size = 20
//!
//! [defaults]
//! array_size = 10
//!
//! [log]
//! filter = "info"
//! file = "dsa-lab.log"
//! ```

use crate::algorithms::brackets::DEFAULT_STACK_CAPACITY;
use crate::algorithms::circular_queue::DEFAULT_SLOTS;
use crate::algorithms::input::MAX_ARRAY_SIZE;
use crate::algorithms::DEFAULT_STRUCTURE_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "dsa-lab.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config at {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub run: RunConfig,
    pub limits: LimitsConfig,
    pub defaults: DefaultsConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Delay between auto-run steps
    pub interval_ms: u64,
    /// How long one motion takes to play out
    pub animation_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            interval_ms: 800,
            animation_ms: 600,
        }
    }
}

impl RunConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub queue_capacity: usize,
    pub stack_capacity: usize,
    pub bracket_stack_capacity: usize,
    pub circular_queue_capacity: usize,
    pub max_array_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_STRUCTURE_CAPACITY,
            stack_capacity: DEFAULT_STRUCTURE_CAPACITY,
            bracket_stack_capacity: DEFAULT_STACK_CAPACITY,
            circular_queue_capacity: DEFAULT_SLOTS,
            max_array_size: MAX_ARRAY_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Size of generated arrays when `--size` is not given
    pub array_size: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { array_size: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `DSA_LAB_LOG` is unset
    pub filter: String,
    /// Where TUI mode writes logs; discarded when unset
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl LabConfig {
    /// Load from an explicit path, or from `dsa-lab.toml` if present
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    debug!("no config file, using defaults");
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("run.interval_ms", self.run.interval_ms as usize),
            ("limits.queue_capacity", self.limits.queue_capacity),
            ("limits.stack_capacity", self.limits.stack_capacity),
            ("limits.bracket_stack_capacity", self.limits.bracket_stack_capacity),
            ("limits.circular_queue_capacity", self.limits.circular_queue_capacity),
            ("limits.max_array_size", self.limits.max_array_size),
            ("defaults.array_size", self.defaults.array_size),
        ];
        if let Some((name, _)) = checks.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be greater than zero",
                name
            )));
        }
        Ok(())
    }
}
