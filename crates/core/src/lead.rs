//! Minimal lead view used by classification consumers
//!
//! Storage owns the full lead record; the engine only needs contact fields
//! (for messaging eligibility), the assignee and the remark text.

use serde::{Deserialize, Serialize};

/// Outbound messaging channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    WhatsApp,
    Email,
}

impl Channel {
    /// Whether the lead has the contact detail this channel sends to
    pub fn reaches(&self, lead: &Lead) -> bool {
        let contact = match self {
            Self::WhatsApp => lead.phone.as_deref(),
            Self::Email => lead.email.as_deref(),
        };
        contact.map(|c| !c.trim().is_empty()).unwrap_or(false)
    }
}

/// A lead as seen by the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// CSM the lead is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_remark: Option<String>,
    /// Older imports store the remark under `lastRemark` or `remark`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Lead {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.current_remark = Some(remark.into());
        self
    }

    /// Remark to classify: `current_remark`, then `last_remark`, then `remark`,
    /// skipping empty values.
    pub fn remark_text(&self) -> Option<&str> {
        [&self.current_remark, &self.last_remark, &self.remark]
            .into_iter()
            .filter_map(|r| r.as_deref())
            .find(|r| !r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remark_resolution_order() {
        let mut lead = Lead::new("Asha");
        assert_eq!(lead.remark_text(), None);

        lead.remark = Some("legacy".to_string());
        assert_eq!(lead.remark_text(), Some("legacy"));

        lead.last_remark = Some("older".to_string());
        assert_eq!(lead.remark_text(), Some("older"));

        lead.current_remark = Some(String::new());
        assert_eq!(lead.remark_text(), Some("older"));

        lead.current_remark = Some("latest".to_string());
        assert_eq!(lead.remark_text(), Some("latest"));
    }

    #[test]
    fn test_channel_reach() {
        let lead = Lead::new("Ravi").with_phone("+91 98765 43210");
        assert!(Channel::WhatsApp.reaches(&lead));
        assert!(!Channel::Email.reaches(&lead));

        let blank = Lead::new("Blank").with_email("  ");
        assert!(!Channel::Email.reaches(&blank));
    }

    #[test]
    fn test_deserialize_dashboard_json() {
        let json = r#"{
            "name": "Meera",
            "phone": "9876543210",
            "assignedTo": "Priya",
            "currentRemark": "Payment this week"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.assigned_to.as_deref(), Some("Priya"));
        assert_eq!(lead.remark_text(), Some("Payment this week"));
        assert!(lead.email.is_none());
    }
}
