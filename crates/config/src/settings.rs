//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{env, paths};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode
    #[default]
    Development,
    /// Staging mode
    Staging,
    /// Production mode
    Production,
}

impl RuntimeEnvironment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Disposition rule table source
    #[serde(default)]
    pub rules: RuleSettings,
}

/// Where the disposition rule table comes from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuleSettings {
    /// YAML rule file; the built-in table is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Fail on validation warnings (shadowed or duplicated phrases)
    #[serde(default)]
    pub deny_warnings: bool,
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_rules()
    }

    fn validate_rules(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.rules.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "rules.path".to_string(),
                    message: "Path must not be empty".to_string(),
                });
            }

            if !Path::new(path).exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
        }

        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > config/{env} > config/default > defaults
pub fn load_settings(environment: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name(paths::DEFAULT_SETTINGS).required(false));

    if let Some(env_name) = environment {
        builder = builder.add_source(
            File::with_name(&format!("{}/{}", paths::SETTINGS_DIR, env_name)).required(false),
        );
    }

    builder = builder.add_source(
        Environment::with_prefix(env::PREFIX)
            .separator(env::SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        environment = ?settings.environment,
        rules_path = ?settings.rules.path,
        "Settings loaded"
    );

    Ok(settings)
}

/// Load settings for the environment named by `LEADBOARD_ENV`
pub fn load_settings_from_env() -> Result<Settings, ConfigError> {
    let environment = std::env::var(env::ENV_SELECTOR).ok();
    load_settings(environment.as_deref())
}
