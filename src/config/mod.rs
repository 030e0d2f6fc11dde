//! Configuration module for Detective Quest.
//!
//! This module provides a configuration system that can load settings from a
//! TOML file and override them with environment variables. All configuration
//! values are validated for correctness before use. The room topology is a
//! compiled-in constant and deliberately not configurable; only the ledger
//! sizing and logging behavior are.

use std::path::PathBuf;
use once_cell::sync::OnceCell;
use crate::error::config::ConfigError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub mod ledger;

pub use ledger::LedgerConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "QUEST";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for Detective Quest.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestConfig {
    /// Suspect ledger configuration
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Log configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for QuestConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.ledger.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level to emit: trace, debug, info, warn, or error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit machine-readable JSON lines instead of the pretty format.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "unknown log level: {other}"
            ))),
        }
    }
}

/// Loads configuration from an optional file plus environment overrides.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Path to the configuration file, if one was given.
    path: Option<PathBuf>,

    /// Prefix for environment variable overrides (e.g. `QUEST_LEDGER__BUCKET_COUNT`).
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a loader for the given file path and environment prefix.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    /// * `env_prefix` - Prefix for environment variable overrides
    pub fn new(path: Option<&std::path::Path>, env_prefix: &str) -> Self {
        Self {
            path: path.map(PathBuf::from),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads, deserializes, and validates the configuration.
    ///
    /// Values are layered: built-in defaults, then the file (when given),
    /// then environment variables.
    ///
    /// # Returns
    ///
    /// * `Ok(QuestConfig)` if loading and validation succeeded
    /// * `Err(ConfigError)` otherwise
    pub fn load(&self) -> ConfigResult<QuestConfig> {
        let mut builder = Config::builder();

        if let Some(path) = &self.path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let raw = builder
            .build()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let config: QuestConfig = raw
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }
}

/// Global configuration instance, initialized once at startup.
static GLOBAL_CONFIG: OnceCell<QuestConfig> = OnceCell::new();

/// Initialize the default configuration for Detective Quest.
///
/// This loads the default configuration file when present and merges it with
/// any environment variables. A missing default file is not an error; the
/// built-in defaults are used instead.
///
/// # Returns
///
/// * `Ok(())` if the configuration was successfully initialized
/// * `Err(ConfigError)` if there was an error initializing the configuration
pub fn init_default_config() -> ConfigResult<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
    let loader = if config_path.exists() {
        ConfigLoader::new(Some(config_path.as_path()), ENV_PREFIX)
    } else {
        tracing::warn!(
            "Default configuration file not found at: {}",
            DEFAULT_CONFIG_PATH
        );
        ConfigLoader::new(None, ENV_PREFIX)
    };

    let config = loader.load()?;
    init_global_config(config);
    Ok(())
}

/// Install the global configuration. Later calls are ignored.
pub fn init_global_config(config: QuestConfig) {
    let _ = GLOBAL_CONFIG.set(config);
}

/// Get the global configuration, falling back to defaults if none was installed.
pub fn get_global_config() -> &'static QuestConfig {
    GLOBAL_CONFIG.get_or_init(QuestConfig::default)
}
