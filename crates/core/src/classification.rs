//! Classification result produced for a single remark

use serde::{Deserialize, Serialize};

use crate::Temperature;

/// Label used for both disposition and sub-disposition when a remark
/// is empty or matches no rule
pub const REMARK_NOT_CLEAR: &str = "Remark Not Clear";

/// Disposition, sub-disposition and temperature for one remark.
///
/// Never cached: callers recompute it from the remark text whenever they
/// need it, so the remark stays the single source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Primary outcome category
    pub disposition: String,
    /// Finer-grained reason within the disposition
    pub sub_disposition: String,
    /// Lead temperature tier
    #[serde(rename = "leadTemp")]
    pub temperature: Temperature,
}

impl Classification {
    pub fn new(
        disposition: impl Into<String>,
        sub_disposition: impl Into<String>,
        temperature: Temperature,
    ) -> Self {
        Self {
            disposition: disposition.into(),
            sub_disposition: sub_disposition.into(),
            temperature,
        }
    }

    /// "Remark Not Clear" / "Remark Not Clear" / Cold
    pub fn fallback() -> Self {
        Self::new(REMARK_NOT_CLEAR, REMARK_NOT_CLEAR, Temperature::Cold)
    }

    /// True when no rule produced this result
    pub fn is_fallback(&self) -> bool {
        self.disposition == REMARK_NOT_CLEAR && self.sub_disposition == REMARK_NOT_CLEAR
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::fallback()
    }
}
