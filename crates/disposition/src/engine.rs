//! Remark classification engine
//!
//! Converts free-text call remarks into a disposition, sub-disposition and
//! lead temperature by case-insensitive substring matching over an ordered
//! rule table.
//!
//! # Algorithm
//!
//! 1. Empty or whitespace-only remark: fallback.
//! 2. Lowercase and trim. Punctuation and inner whitespace are kept, so
//!    phrases like `"vp "` can rely on spacing.
//! 3. Walk rules in order, phrases in order; the first phrase contained in
//!    the remark decides the result.
//! 4. Nothing matched: fallback ("Remark Not Clear" / Cold).
//!
//! # Example
//!
//! ```
//! use leadboard_core::{RemarkClassifier, Temperature};
//! use leadboard_disposition::DispositionEngine;
//!
//! let engine = DispositionEngine::builtin();
//! let result = engine.classify("Not interested, just exploring options");
//!
//! assert_eq!(result.disposition, "Not interested");
//! assert_eq!(result.temperature, Temperature::Cold);
//! ```

use std::sync::Arc;

use leadboard_config::{ConfigError, Settings};
use leadboard_core::{Classification, RemarkClassifier};

use crate::table::{Rule, RuleTable};

/// Winning rule for a remark, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    /// Position of the rule in the table
    pub index: usize,
    pub rule: &'a Rule,
    /// Phrase that fired
    pub phrase: &'a str,
}

impl RuleMatch<'_> {
    pub fn classification(&self) -> Classification {
        Classification::new(
            self.rule.disposition(),
            self.rule.sub_disposition(),
            self.rule.temperature(),
        )
    }
}

/// Rule-table classifier. Cheap to clone; the table is shared.
#[derive(Debug, Clone)]
pub struct DispositionEngine {
    table: Arc<RuleTable>,
}

impl DispositionEngine {
    pub fn new(table: RuleTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Engine over the built-in rule table
    pub fn builtin() -> Self {
        Self::new(RuleTable::builtin())
    }

    /// Engine over the rule table selected by settings
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        Ok(Self::new(RuleTable::from_settings(settings)?))
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Rule that decides this remark, or `None` for the fallback
    pub fn matched_rule<'a>(&'a self, remark: &str) -> Option<RuleMatch<'a>> {
        if remark.trim().is_empty() {
            return None;
        }

        let normalized = normalize(remark);
        self.table.iter().enumerate().find_map(|(index, rule)| {
            rule.first_match(&normalized)
                .map(|phrase| RuleMatch { index, rule, phrase })
        })
    }
}

impl Default for DispositionEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RemarkClassifier for DispositionEngine {
    fn classify(&self, remark: &str) -> Classification {
        match self.matched_rule(remark) {
            Some(found) => {
                tracing::trace!(
                    rule = found.index,
                    phrase = found.phrase,
                    disposition = found.rule.disposition(),
                    "Remark matched"
                );
                found.classification()
            }
            None => Classification::fallback(),
        }
    }
}

fn normalize(remark: &str) -> String {
    remark.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadboard_config::{RuleDefinition, RulesConfig};
    use leadboard_core::Temperature;

    fn engine() -> DispositionEngine {
        DispositionEngine::builtin()
    }

    #[test]
    fn test_empty_and_whitespace_fall_back() {
        let engine = engine();
        assert!(engine.classify("").is_fallback());
        assert!(engine.classify("   ").is_fallback());
        assert!(engine.classify("\t\n").is_fallback());
        assert!(engine.classify_remark(None).is_fallback());
        assert_eq!(engine.classify("").temperature, Temperature::Cold);
    }

    #[test]
    fn test_not_interested_outranks_interested() {
        let c = engine().classify("not interested, just exploring options");
        assert_eq!(c.disposition, "Not interested");
        assert_eq!(c.sub_disposition, "Just Exploring");
        assert_eq!(c.temperature, Temperature::Cold);
    }

    #[test]
    fn test_case_insensitive() {
        let engine = engine();
        let upper = engine.classify("DO NOT CALL me again");
        let lower = engine.classify("do not call me again");
        assert_eq!(upper, lower);
        assert_eq!(upper.disposition, "DNC");
        assert_eq!(upper.temperature, Temperature::Dead);
    }

    #[test]
    fn test_substring_match() {
        let c = engine().classify("Please call back tomorrow");
        assert_eq!(c.disposition, "Call Back");
        assert_eq!(c.temperature, Temperature::Warm);
    }

    #[test]
    fn test_no_match_falls_back() {
        let c = engine().classify("asdkjasdkj random text xyz");
        assert_eq!(c, Classification::fallback());
    }

    #[test]
    fn test_plain_interest_is_hot() {
        let c = engine().classify("Very keen, looking forward to the course");
        assert_eq!(c.disposition, "Follow up");
        assert_eq!(c.sub_disposition, "Interested");
        assert_eq!(c.temperature, Temperature::Hot);
    }

    #[test]
    fn test_matched_rule_reports_phrase() {
        let engine = engine();
        let found = engine.matched_rule("  PO Raised by procurement ").unwrap();
        assert_eq!(found.phrase, "po raised");
        assert_eq!(found.rule.sub_disposition(), "Shared PO");
        assert_eq!(engine.table().rules()[found.index], *found.rule);
        assert!(engine.matched_rule("zzz").is_none());
    }

    #[test]
    fn test_rule_order_beats_phrase_specificity() {
        let config = RulesConfig {
            rules: vec![
                RuleDefinition::new("Fallout", "Other course", &["course"], Temperature::Cold),
                RuleDefinition::new(
                    "Not interested",
                    "Looking for Certification Course",
                    &["certification course only", "only certification"],
                    Temperature::Cold,
                ),
            ],
        };
        let engine = DispositionEngine::new(RuleTable::from_config("test", config).unwrap());
        let c = engine.classify("certification course only please");
        assert_eq!(c.disposition, "Fallout");
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        let config = RulesConfig {
            rules: vec![RuleDefinition::new(
                "Prospect",
                "Senior contact",
                &["vp "],
                Temperature::Hot,
            )],
        };
        let engine = DispositionEngine::new(RuleTable::from_config("test", config).unwrap());
        assert_eq!(engine.classify("Spoke to VP sales").disposition, "Prospect");
        assert!(engine.classify("uses a vpn").is_fallback());
        // trimming removes the trailing space the phrase depends on
        assert!(engine.classify("spoke to the vp ").is_fallback());
    }

    #[test]
    fn test_unicode_remarks_do_not_panic() {
        let engine = engine();
        assert!(engine.classify("ग्राहक ने फोन नहीं उठाया").is_fallback());
        assert_eq!(engine.classify("İ — DNC ✓").disposition, "DNC");
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = engine();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.classify("payment this week").temperature)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Temperature::Hot);
        }
    }
}
