//! Remark classification for the lead dashboard
//!
//! Turns free-text sales-call remarks into a disposition, sub-disposition
//! and lead temperature using an ordered table of trigger phrases.
//!
//! # Features
//!
//! - Built-in canonical rule table, or a validated YAML replacement
//! - Deterministic first-match classification, safe to share across threads
//! - Pipeline counts, disposition breakdowns and lead filters for
//!   dashboards and outbound messaging
//!
//! # Example
//!
//! ```
//! use leadboard_core::{RemarkClassifier, Temperature};
//! use leadboard_disposition::DispositionEngine;
//!
//! let engine = DispositionEngine::builtin();
//! let temps: Vec<_> = ["DNC please", "payment this week confirmed", ""]
//!     .iter()
//!     .map(|r| engine.classify(r).temperature)
//!     .collect();
//!
//! assert_eq!(temps, vec![Temperature::Dead, Temperature::Hot, Temperature::Cold]);
//! ```

mod builtin;
pub mod engine;
pub mod insights;
pub mod table;

pub use engine::{DispositionEngine, RuleMatch};
pub use insights::{
    disposition_breakdown, eligible_recipients, format_percent, percent_of, DispositionCount,
    FilterError, LeadFilter, PipelineSummary, TemperatureCounts,
};
pub use table::{Rule, RuleTable};

// Re-exported so callers need only this crate for the common path
pub use leadboard_core::{
    disposition_style_key, temperature_style_key, Classification, RemarkClassifier, Temperature,
};
