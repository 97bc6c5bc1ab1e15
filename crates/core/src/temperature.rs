//! Lead temperature tiers
//!
//! Every classification carries one of four temperatures. The tier drives
//! pipeline counts, badge colours and outbound messaging eligibility.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Lead quality/urgency tier derived from a remark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Temperature {
    /// Payment, conversion or strong interest
    #[serde(alias = "hot", alias = "HOT")]
    Hot,
    /// Pending: busy, callback, follow-up, next batch
    #[serde(alias = "warm", alias = "WARM")]
    Warm,
    /// Negative signals, or nothing usable in the remark
    #[serde(alias = "cold", alias = "COLD")]
    Cold,
    /// Disqualified: DNC, wrong number, not eligible
    #[serde(alias = "dead", alias = "DEAD")]
    Dead,
}

impl Temperature {
    /// All tiers, hottest first
    pub const ALL: [Temperature; 4] = [Self::Hot, Self::Warm, Self::Cold, Self::Dead];

    /// Label as shown in the dashboard ("Hot", "Warm", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Warm => "Warm",
            Self::Cold => "Cold",
            Self::Dead => "Dead",
        }
    }

    /// Lowercase styling token ("hot", "warm", ...)
    pub fn style_key(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
            Self::Dead => "dead",
        }
    }

    /// Whether the lead was reached at all. Dead leads count as not connected.
    pub fn is_connected(&self) -> bool {
        !matches!(self, Self::Dead)
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::Cold
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four temperature labels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lead temperature '{0}' (expected Hot, Warm, Cold or Dead)")]
pub struct ParseTemperatureError(pub String);

impl FromStr for Temperature {
    type Err = ParseTemperatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(Self::Hot),
            "warm" => Ok(Self::Warm),
            "cold" => Ok(Self::Cold),
            "dead" => Ok(Self::Dead),
            _ => Err(ParseTemperatureError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Hot".parse::<Temperature>().unwrap(), Temperature::Hot);
        assert_eq!(" dead ".parse::<Temperature>().unwrap(), Temperature::Dead);
        assert_eq!("WARM".parse::<Temperature>().unwrap(), Temperature::Warm);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "lukewarm".parse::<Temperature>().unwrap_err();
        assert_eq!(err, ParseTemperatureError("lukewarm".to_string()));
    }

    #[test]
    fn test_display_and_style_key() {
        for temp in Temperature::ALL {
            assert_eq!(temp.to_string().to_lowercase(), temp.style_key());
        }
    }

    #[test]
    fn test_serde_uses_dashboard_labels() {
        assert_eq!(serde_json::to_string(&Temperature::Warm).unwrap(), "\"Warm\"");
        let parsed: Temperature = serde_json::from_str("\"dead\"").unwrap();
        assert_eq!(parsed, Temperature::Dead);
        assert!(serde_json::from_str::<Temperature>("\"Tepid\"").is_err());
    }

    #[test]
    fn test_connected() {
        assert!(Temperature::Cold.is_connected());
        assert!(!Temperature::Dead.is_connected());
    }
}
