//! Disposition rule table
//!
//! An ordered, immutable list of rules. Order is priority: the classifier
//! returns the first rule with a matching phrase, so a table is only ever
//! iterated, never reordered or mutated after construction.
//!
//! Tables from configuration are validated before use; a critical finding
//! is a startup error rather than a silent misclassification later.

use std::path::Path;

use leadboard_config::constants::BUILTIN_RULES_SOURCE;
use leadboard_config::{
    ConfigError, ConfigValidator, RuleDefinition, RulesConfig, Settings, ValidationResult,
    ValidationSeverity,
};
use leadboard_core::{Temperature, REMARK_NOT_CLEAR};

use crate::builtin;

/// A single classification rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    disposition: String,
    sub_disposition: String,
    phrases: Vec<String>,
    temperature: Temperature,
}

impl Rule {
    pub fn disposition(&self) -> &str {
        &self.disposition
    }

    pub fn sub_disposition(&self) -> &str {
        &self.sub_disposition
    }

    /// Lowercase trigger phrases in match order
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// First phrase found in an already-normalized remark
    pub fn first_match(&self, normalized: &str) -> Option<&str> {
        self.phrases
            .iter()
            .map(String::as_str)
            .find(|phrase| normalized.contains(phrase))
    }
}

impl From<RuleDefinition> for Rule {
    fn from(def: RuleDefinition) -> Self {
        Self {
            disposition: def.disposition,
            sub_disposition: def.sub_disposition,
            phrases: def.phrases,
            temperature: def.temperature,
        }
    }
}

/// Ordered, read-only rule catalogue
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    /// Distinct dispositions in first-appearance order
    dispositions: Vec<String>,
}

impl RuleTable {
    /// The canonical built-in table
    pub fn builtin() -> Self {
        let table = Self::from_rules(builtin::rule_definitions());
        tracing::debug!(
            source = BUILTIN_RULES_SOURCE,
            rules = table.len(),
            "Using built-in disposition rules"
        );
        table
    }

    /// Build from parsed configuration, logging warnings
    pub fn from_config(source: &str, config: RulesConfig) -> Result<Self, ConfigError> {
        Self::build(source, config, false)
    }

    /// Build from parsed configuration, treating warnings as errors
    pub fn from_config_strict(source: &str, config: RulesConfig) -> Result<Self, ConfigError> {
        Self::build(source, config, true)
    }

    /// Load and validate a YAML rule file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = path.as_ref().display().to_string();
        let config = RulesConfig::load(path)?;
        Self::from_config(&source, config)
    }

    /// Rule file named in settings, or the built-in table when none is set
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        match &settings.rules.path {
            Some(path) => {
                let source = path.display().to_string();
                let config = RulesConfig::load(path)?;
                Self::build(&source, config, settings.rules.deny_warnings)
            }
            None => Ok(Self::builtin()),
        }
    }

    fn build(source: &str, config: RulesConfig, deny_warnings: bool) -> Result<Self, ConfigError> {
        let result = ConfigValidator::new().validate(source, &config);
        report(&result);

        if !result.is_ok() || (deny_warnings && !result.is_clean()) {
            return Err(ConfigError::Validation(result.summary()));
        }

        let table = Self::from_rules(config.rules);
        tracing::info!(
            source = %source,
            rules = table.len(),
            dispositions = table.dispositions.len(),
            "Loaded disposition rules"
        );
        Ok(table)
    }

    fn from_rules(definitions: Vec<RuleDefinition>) -> Self {
        let rules: Vec<Rule> = definitions.into_iter().map(Rule::from).collect();

        let mut dispositions: Vec<String> = Vec::new();
        for rule in &rules {
            if !dispositions.iter().any(|d| d == &rule.disposition) {
                dispositions.push(rule.disposition.clone());
            }
        }

        Self { rules, dispositions }
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Disposition labels in first-appearance order (fallback excluded)
    pub fn dispositions(&self) -> &[String] {
        &self.dispositions
    }

    /// Whether a label can come out of this table, fallback included
    pub fn is_known_disposition(&self, label: &str) -> bool {
        label == REMARK_NOT_CLEAR || self.dispositions.iter().any(|d| d == label)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

fn report(result: &ValidationResult) {
    for finding in &result.errors {
        match finding.severity {
            ValidationSeverity::Critical => {
                tracing::error!(finding = %finding, "Invalid disposition rule")
            }
            ValidationSeverity::Warning => {
                tracing::warn!(finding = %finding, "Suspicious disposition rule")
            }
        }
    }
}
