//! Remark classifier trait
//!
//! # Example
//!
//! ```ignore
//! use leadboard_core::traits::RemarkClassifier;
//!
//! let classification = classifier.classify("customer busy right now");
//! assert_eq!(classification.temperature, Temperature::Warm);
//! ```

use crate::{Classification, Lead};

/// Converts free-text remarks into a classification.
///
/// Implementations must be pure and total: the same input always yields the
/// same output, and no input fails. Empty or absent remarks yield
/// [`Classification::fallback`].
pub trait RemarkClassifier: Send + Sync {
    /// Classify a remark
    fn classify(&self, remark: &str) -> Classification;

    /// Classify a remark that may be absent
    fn classify_remark(&self, remark: Option<&str>) -> Classification {
        match remark {
            Some(text) => self.classify(text),
            None => Classification::fallback(),
        }
    }

    /// Classify a lead by its resolved remark
    fn classify_lead(&self, lead: &Lead) -> Classification {
        self.classify_remark(lead.remark_text())
    }
}
