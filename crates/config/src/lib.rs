//! Configuration management for leadboard
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, `config/{env}`)
//! - Environment variables (LEADBOARD_ prefix, `__` separator)
//!
//! # Disposition Rules
//!
//! The disposition rule table ships built in. A replacement table can be
//! loaded from a YAML file (see `rules::RulesConfig`) named by
//! `rules.path` in settings. Rule files are validated with
//! `rules::ConfigValidator` before use; any critical finding is a
//! startup error.

pub mod constants;
pub mod rules;
pub mod settings;

pub use rules::{
    ConfigValidator, RuleDefinition, RulesConfig, RulesConfigError, ValidationCategory,
    ValidationError, ValidationResult, ValidationSeverity,
};
pub use settings::{load_settings, load_settings_from_env, RuleSettings, RuntimeEnvironment, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Rule table validation failed: {0}")]
    Validation(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<RulesConfigError> for ConfigError {
    fn from(err: RulesConfigError) -> Self {
        match err {
            RulesConfigError::FileNotFound(path, reason) => {
                ConfigError::FileNotFound(format!("{}: {}", path, reason))
            }
            RulesConfigError::ParseError(reason) => ConfigError::ParseError(reason),
        }
    }
}
