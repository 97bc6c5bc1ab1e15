//! Rule Table Validator
//!
//! Validates a disposition rule table at startup so that a malformed table
//! fails loudly instead of silently misclassifying remarks.
//! Performs:
//! - Required labels and phrases check
//! - Phrase normalization check (phrases must be lowercase)
//! - Temperature consistency per disposition/sub-disposition pair
//! - Reachability: a rule whose every phrase contains a phrase of an earlier
//!   rule can never win
//!
//! # Example
//!
//! ```ignore
//! use leadboard_config::rules::ConfigValidator;
//!
//! let result = ConfigValidator::new().validate("dispositions.yaml", &config);
//! if !result.is_ok() {
//!     return Err(ConfigError::Validation(result.summary()));
//! }
//! ```

use std::collections::{HashMap, HashSet};

use leadboard_core::Temperature;

use super::{RuleDefinition, RulesConfig};

/// Validation error with context
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Category of error
    pub category: ValidationCategory,
    /// Source file or table name
    pub source: String,
    /// Rule position and label, e.g. "rules[3] (Fallout / Fee is high)"
    pub field: Option<String>,
    /// Error message
    pub message: String,
    /// Severity level
    pub severity: ValidationSeverity,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field_str = self.field.as_deref().unwrap_or("(root)");
        write!(
            f,
            "[{:?}] {}/{}: {}",
            self.severity, self.source, field_str, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

/// Category of validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCategory {
    /// Missing label, phrase or rule
    MissingRequired,
    /// Phrase that can never match a normalized remark
    InvalidValue,
    /// Same disposition pair with different temperatures
    Conflict,
    /// Rule or phrase that an earlier rule always wins over
    Shadowed,
    /// Repeated phrase within a rule
    Duplicate,
}

/// Severity of validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    /// Informational warning
    Warning,
    /// Critical - will prevent startup
    Critical,
}

/// Validation result
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Source being validated
    pub source: String,
}

impl ValidationResult {
    /// Create a new validation result
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            errors: Vec::new(),
            source: source.into(),
        }
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a critical error
    pub fn add_critical(
        &mut self,
        category: ValidationCategory,
        field: Option<String>,
        message: impl Into<String>,
    ) {
        let source = self.source.clone();
        self.add_error(ValidationError {
            category,
            source,
            field,
            message: message.into(),
            severity: ValidationSeverity::Critical,
        });
    }

    /// Add a warning
    pub fn add_warning(
        &mut self,
        category: ValidationCategory,
        field: Option<String>,
        message: impl Into<String>,
    ) {
        let source = self.source.clone();
        self.add_error(ValidationError {
            category,
            source,
            field,
            message: message.into(),
            severity: ValidationSeverity::Warning,
        });
    }

    /// Check if validation passed (no critical errors)
    pub fn is_ok(&self) -> bool {
        !self.errors.iter().any(|e| e.severity == ValidationSeverity::Critical)
    }

    /// Check if validation produced no findings at all
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get only critical errors
    pub fn critical_errors(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Critical)
            .collect()
    }

    /// Get only warnings
    pub fn warnings(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Warning)
            .collect()
    }

    /// Summary string
    pub fn summary(&self) -> String {
        let critical = self.critical_errors().len();
        let warnings = self.warnings().len();

        if self.errors.is_empty() {
            format!("Rules '{}': All validations passed", self.source)
        } else {
            let first = self
                .critical_errors()
                .first()
                .map(|e| format!(" (first: {})", e))
                .unwrap_or_default();
            format!(
                "Rules '{}': {} critical, {} warnings{}",
                self.source, critical, warnings, first
            )
        }
    }
}

/// Rule table validator
pub struct ConfigValidator {
    /// Whether to include warnings
    include_warnings: bool,
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            include_warnings: true,
        }
    }

    /// Set whether to include warnings
    pub fn with_warnings(mut self, include: bool) -> Self {
        self.include_warnings = include;
        self
    }

    /// Validate a rule table
    pub fn validate(&self, source: &str, config: &RulesConfig) -> ValidationResult {
        let mut result = ValidationResult::new(source);

        if config.rules.is_empty() {
            result.add_critical(ValidationCategory::MissingRequired, None, "No rules defined");
            return result;
        }

        for (index, rule) in config.rules.iter().enumerate() {
            self.validate_rule(index, rule, &mut result);
        }

        self.validate_temperatures(config, &mut result);
        self.validate_reachability(config, &mut result);

        if !self.include_warnings {
            result
                .errors
                .retain(|e| e.severity != ValidationSeverity::Warning);
        }

        result
    }

    /// Labels and phrases of a single rule
    fn validate_rule(&self, index: usize, rule: &RuleDefinition, result: &mut ValidationResult) {
        let field = Some(rule_field(index, rule));

        if rule.disposition.trim().is_empty() {
            result.add_critical(
                ValidationCategory::MissingRequired,
                field.clone(),
                "Rule missing disposition label",
            );
        }

        if rule.sub_disposition.trim().is_empty() {
            result.add_critical(
                ValidationCategory::MissingRequired,
                field.clone(),
                "Rule missing sub-disposition label",
            );
        }

        if rule.phrases.is_empty() {
            result.add_critical(
                ValidationCategory::MissingRequired,
                field,
                "Rule must have at least one trigger phrase",
            );
            return;
        }

        let mut seen = HashSet::new();
        for phrase in &rule.phrases {
            if phrase.trim().is_empty() {
                result.add_critical(
                    ValidationCategory::MissingRequired,
                    field.clone(),
                    "Trigger phrase must not be blank",
                );
                continue;
            }

            if phrase.to_lowercase() != *phrase {
                result.add_critical(
                    ValidationCategory::InvalidValue,
                    field.clone(),
                    format!("Trigger phrase '{}' must be lowercase", phrase),
                );
            }

            if !seen.insert(phrase.as_str()) {
                result.add_warning(
                    ValidationCategory::Duplicate,
                    field.clone(),
                    format!("Trigger phrase '{}' listed more than once", phrase),
                );
            }
        }
    }

    /// The same disposition pair must always imply the same temperature
    fn validate_temperatures(&self, config: &RulesConfig, result: &mut ValidationResult) {
        let mut first_seen: HashMap<(&str, &str), (usize, Temperature)> = HashMap::new();

        for (index, rule) in config.rules.iter().enumerate() {
            let key = (rule.disposition.as_str(), rule.sub_disposition.as_str());
            match first_seen.get(&key) {
                Some((earlier, temperature)) if *temperature != rule.temperature => {
                    result.add_critical(
                        ValidationCategory::Conflict,
                        Some(rule_field(index, rule)),
                        format!(
                            "Temperature {} conflicts with {} assigned at rules[{}]",
                            rule.temperature, temperature, earlier
                        ),
                    );
                }
                Some(_) => {}
                None => {
                    first_seen.insert(key, (index, rule.temperature));
                }
            }
        }
    }

    /// A phrase containing an earlier rule's phrase can never fire. A rule
    /// made only of such phrases is dead configuration.
    fn validate_reachability(&self, config: &RulesConfig, result: &mut ValidationResult) {
        for (index, rule) in config.rules.iter().enumerate() {
            if rule.phrases.is_empty() {
                continue;
            }

            let earlier = &config.rules[..index];
            let mut shadowed = Vec::new();

            for phrase in &rule.phrases {
                let winner = earlier.iter().enumerate().find_map(|(pos, other)| {
                    other
                        .phrases
                        .iter()
                        .find(|p| !p.trim().is_empty() && phrase.contains(p.as_str()))
                        .map(|p| (pos, p))
                });

                if let Some((pos, by)) = winner {
                    shadowed.push((phrase, pos, by));
                }
            }

            let field = Some(rule_field(index, rule));
            if shadowed.len() == rule.phrases.len() {
                result.add_critical(
                    ValidationCategory::Shadowed,
                    field,
                    format!(
                        "Rule can never match: every trigger phrase is shadowed by an earlier rule (first: '{}' by rules[{}] '{}')",
                        shadowed[0].0, shadowed[0].1, shadowed[0].2
                    ),
                );
            } else {
                for (phrase, pos, by) in shadowed {
                    result.add_warning(
                        ValidationCategory::Shadowed,
                        field.clone(),
                        format!(
                            "Trigger phrase '{}' is shadowed by '{}' at rules[{}]",
                            phrase, by, pos
                        ),
                    );
                }
            }
        }
    }
}

fn rule_field(index: usize, rule: &RuleDefinition) -> String {
    format!("rules[{}] ({})", index, rule.label())
}
