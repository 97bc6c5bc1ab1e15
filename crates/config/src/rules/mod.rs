//! Disposition Rule Configuration
//!
//! Defines the YAML schema for disposition rule files. A rule file replaces
//! the built-in rule table wholesale; rule order in the file is priority
//! order (first match wins), so entries must stay sorted Dead, Cold, Warm,
//! Hot for negative phrases to outrank positive ones.
//!
//! ```yaml
//! rules:
//!   - disposition: DNC
//!     sub_disposition: DNC
//!     temperature: Dead
//!     phrases: ["do not call", "dnc"]
//! ```

mod validator;

pub use validator::{
    ConfigValidator, ValidationCategory, ValidationError, ValidationResult, ValidationSeverity,
};

use leadboard_core::Temperature;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rule table loaded from a rules YAML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Rules in priority order
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl RulesConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RulesConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RulesConfigError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;

        Self::from_yaml(&content)
    }

    /// Parse from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, RulesConfigError> {
        serde_yaml::from_str(content).map_err(|e| RulesConfigError::ParseError(e.to_string()))
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Single rule entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDefinition {
    /// Primary outcome label, e.g. "Fallout"
    pub disposition: String,
    /// Finer label, e.g. "Fee is high"
    pub sub_disposition: String,
    /// Temperature implied by this rule
    pub temperature: Temperature,
    /// Lowercase trigger phrases, matched as substrings
    pub phrases: Vec<String>,
}

impl RuleDefinition {
    pub fn new(
        disposition: impl Into<String>,
        sub_disposition: impl Into<String>,
        phrases: &[&str],
        temperature: Temperature,
    ) -> Self {
        Self {
            disposition: disposition.into(),
            sub_disposition: sub_disposition.into(),
            temperature,
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// "Disposition / Sub-Disposition", used in diagnostics
    pub fn label(&self) -> String {
        format!("{} / {}", self.disposition, self.sub_disposition)
    }
}

/// Errors when loading a rules file
#[derive(Debug)]
pub enum RulesConfigError {
    FileNotFound(String, String),
    ParseError(String),
}

impl std::fmt::Display for RulesConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path, err) => {
                write!(f, "Rules config not found at {}: {}", path, err)
            }
            Self::ParseError(err) => write!(f, "Failed to parse rules config: {}", err),
        }
    }
}

impl std::error::Error for RulesConfigError {}
