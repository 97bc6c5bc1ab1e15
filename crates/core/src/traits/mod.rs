//! Core traits for remark classification
//!
//! ```text
//! RemarkClassifier: remark text -> Classification
//! ```
//!
//! Consumers (renderers, filters, aggregators, messaging) depend on the trait
//! so that a rule table loaded from configuration can be swapped in without
//! code changes.

mod remark_classifier;

pub use remark_classifier::RemarkClassifier;
