//! Presentation helpers
//!
//! Map disposition and temperature labels to stable styling tokens so that
//! rendering code never special-cases label text. Several dispositions share a
//! style on purpose ("Call Back" and "Other Agent Callback" both render as
//! `callback`), which is why this table is separate from the rule table.
//!
//! All helpers are total: unknown labels get a default instead of failing.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::classification::REMARK_NOT_CLEAR;
use crate::Temperature;

/// Style token for dispositions missing from the lookup
pub const DEFAULT_DISPOSITION_STYLE: &str = "unclear";

/// Style token for unrecognized temperature labels
pub const DEFAULT_TEMPERATURE_STYLE: &str = "cold";

/// Bar colour for dispositions missing from the colour table
pub const DEFAULT_DISPOSITION_COLOR: &str = "#818cf8";

static DISPOSITION_STYLES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Prospect", "prospect"),
        ("Follow up", "followup"),
        ("Converted", "converted"),
        ("Call Back", "callback"),
        ("Other Agent Callback", "callback"),
        ("Other Agent FollowUp", "followup"),
        ("Next Batch", "nextbatch"),
        ("Fallout", "fallout"),
        ("New Lead", "newlead"),
        ("Not interested", "notinterested"),
        ("DNC", "dnc"),
        ("Not Eligible", "noteligible"),
        ("Wrong Number", "wrongnumber"),
        ("Not Enquired", "notenquired"),
        (REMARK_NOT_CLEAR, "unclear"),
    ])
});

static DISPOSITION_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Prospect", "#ef4444"),
        ("Converted", "#10b981"),
        ("Follow up", "#f59e0b"),
        ("Call Back", "#fbbf24"),
        ("Other Agent Callback", "#f59e0b"),
        ("Other Agent FollowUp", "#fbbf24"),
        ("Next Batch", "#06b6d4"),
        ("Fallout", "#3b82f6"),
        ("New Lead", "#818cf8"),
        ("Not interested", "#94a3b8"),
        ("DNC", "#ef4444"),
        ("Not Eligible", "#6b7280"),
        ("Wrong Number", "#6b7280"),
        ("Not Enquired", "#6b7280"),
        (REMARK_NOT_CLEAR, "#64748b"),
    ])
});

/// Styling token for a disposition label, e.g. "Not interested" -> "notinterested".
///
/// Lookup is exact; unknown labels map to `"unclear"`.
pub fn disposition_style_key(disposition: &str) -> &'static str {
    DISPOSITION_STYLES
        .get(disposition)
        .copied()
        .unwrap_or(DEFAULT_DISPOSITION_STYLE)
}

/// Styling token for a temperature label. Anything unrecognized is `"cold"`.
pub fn temperature_style_key(temperature: &str) -> &'static str {
    match temperature {
        "Hot" => Temperature::Hot.style_key(),
        "Warm" => Temperature::Warm.style_key(),
        "Cold" => Temperature::Cold.style_key(),
        "Dead" => Temperature::Dead.style_key(),
        _ => DEFAULT_TEMPERATURE_STYLE,
    }
}

/// Hex colour of the disposition-breakdown bar for a label
pub fn disposition_color(disposition: &str) -> &'static str {
    DISPOSITION_COLORS
        .get(disposition)
        .copied()
        .unwrap_or(DEFAULT_DISPOSITION_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_style_keys() {
        assert_eq!(disposition_style_key("DNC"), "dnc");
        assert_eq!(disposition_style_key("Not interested"), "notinterested");
        assert_eq!(disposition_style_key("Remark Not Clear"), "unclear");
    }

    #[test]
    fn test_shared_disposition_styles() {
        assert_eq!(disposition_style_key("Call Back"), "callback");
        assert_eq!(disposition_style_key("Other Agent Callback"), "callback");
        assert_eq!(
            disposition_style_key("Other Agent FollowUp"),
            disposition_style_key("Follow up")
        );
    }

    #[test]
    fn test_unknown_disposition_is_unclear() {
        assert_eq!(disposition_style_key("Something new"), "unclear");
        assert_eq!(disposition_style_key(""), "unclear");
        // lookup is exact, not case-folded
        assert_eq!(disposition_style_key("dnc"), "unclear");
    }

    #[test]
    fn test_temperature_style_keys() {
        assert_eq!(temperature_style_key("Hot"), "hot");
        assert_eq!(temperature_style_key("Warm"), "warm");
        assert_eq!(temperature_style_key("Cold"), "cold");
        assert_eq!(temperature_style_key("Dead"), "dead");
        assert_eq!(temperature_style_key("unknown-value"), "cold");
        assert_eq!(temperature_style_key(""), "cold");
    }

    #[test]
    fn test_disposition_colors() {
        assert_eq!(disposition_color("Converted"), "#10b981");
        assert_eq!(disposition_color("Wrong Number"), "#6b7280");
        assert_eq!(disposition_color("Unheard of"), DEFAULT_DISPOSITION_COLOR);
    }
}
