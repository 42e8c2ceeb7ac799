//! # Configuration
//!
//! Application configuration loading and management.
//!
//! This module provides configuration structures and loading mechanisms
//! for the trade service, supporting both environment variables and
//! configuration files.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `CADOK_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `CADOK_CONFIG_FILE` | Configuration file path | `config.toml` |
//! | `CADOK_LOG_LEVEL` | Log level | `info` |
//! | `CADOK_LOG_FORMAT` | Log format (json/pretty) | `json` |
//! | `CADOK_MAX_OBJECTS_PER_SIDE` | Object limit per trade side | `10` |
//! | `CADOK_SERVICE_NAME` | Service name for tracing | `cadok-trades` |
//! | `CADOK_ENVIRONMENT` | Environment name | `development` |
//!
//! # Examples
//!
//! ```ignore
//! use cadok_trades::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! println!("log level: {}", config.log.level);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include target (module path) in logs.
    #[serde(default = "default_true")]
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
            include_target: true,
        }
    }
}

// ============================================================================
// Trade Configuration
// ============================================================================

/// Trade negotiation limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeConfig {
    /// Maximum number of objects on either side of a trade.
    #[serde(default = "default_max_objects_per_side")]
    pub max_objects_per_side: usize,
}

impl Default for TradeConfig {
    fn default() -> Self {
        Self {
            max_objects_per_side: default_max_objects_per_side(),
        }
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Trade negotiation limits.
    #[serde(default)]
    pub trade: TradeConfig,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Environment (development, staging, production).
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            trade: TradeConfig::default(),
            service_name: default_service_name(),
            environment: default_environment(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Try to load from config file if it exists
        let config_path =
            std::env::var("CADOK_CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if Path::new(&config_path).exists() {
            config = Self::from_file(&config_path)?;
        }

        // Override with environment variables
        config.apply_env_overrides();

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        // Logging configuration
        if let Ok(level) = std::env::var("CADOK_LOG_LEVEL") {
            self.log.level = level;
        }
        if let Ok(format) = std::env::var("CADOK_LOG_FORMAT") {
            self.log.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Json,
            };
        }

        // Trade configuration
        if let Ok(max) = std::env::var("CADOK_MAX_OBJECTS_PER_SIDE")
            && let Ok(m) = max.parse()
        {
            self.trade.max_objects_per_side = m;
        }

        // Service configuration
        if let Ok(name) = std::env::var("CADOK_SERVICE_NAME") {
            self.service_name = name;
        }
        if let Ok(env) = std::env::var("CADOK_ENVIRONMENT") {
            self.environment = env;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "log.level".to_string(),
                message: format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            });
        }

        // Validate trade limits
        if self.trade.max_objects_per_side == 0 {
            return Err(ConfigError::InvalidValue {
                field: "trade.max_objects_per_side".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_objects_per_side() -> usize {
    10
}

fn default_service_name() -> String {
    "cadok-trades".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}
