//! Lead insights built on remark classification
//!
//! Pipeline counts, disposition breakdowns and lead filtering, including
//! the filter applied before bulk WhatsApp/email sends. Every function
//! reclassifies from the remark text; nothing here is cached.

use serde::Serialize;
use thiserror::Error;

use leadboard_core::{Channel, Lead, ParseTemperatureError, RemarkClassifier, Temperature};

use crate::table::RuleTable;

/// Dashboard filter value meaning "no constraint"
pub const FILTER_ALL: &str = "all";

/// Leads per temperature tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TemperatureCounts {
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
    pub dead: usize,
}

impl TemperatureCounts {
    /// Classify every lead and count tiers
    pub fn tally<C>(classifier: &C, leads: &[Lead]) -> Self
    where
        C: RemarkClassifier + ?Sized,
    {
        let mut counts = Self::default();
        for lead in leads {
            counts.record(classifier.classify_lead(lead).temperature);
        }
        counts
    }

    pub fn record(&mut self, temperature: Temperature) {
        match temperature {
            Temperature::Hot => self.hot += 1,
            Temperature::Warm => self.warm += 1,
            Temperature::Cold => self.cold += 1,
            Temperature::Dead => self.dead += 1,
        }
    }

    pub fn get(&self, temperature: Temperature) -> usize {
        match temperature {
            Temperature::Hot => self.hot,
            Temperature::Warm => self.warm,
            Temperature::Cold => self.cold,
            Temperature::Dead => self.dead,
        }
    }

    pub fn total(&self) -> usize {
        self.hot + self.warm + self.cold + self.dead
    }

    /// Leads that were reached: everything except Dead
    pub fn connected(&self) -> usize {
        self.total() - self.dead
    }
}

/// One bar of the disposition breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispositionCount {
    pub disposition: String,
    pub count: usize,
    /// Share of all leads, in percent
    pub percent: f64,
}

/// Count leads per disposition, largest first. Ties keep first-seen order.
pub fn disposition_breakdown<C>(classifier: &C, leads: &[Lead]) -> Vec<DispositionCount>
where
    C: RemarkClassifier + ?Sized,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for lead in leads {
        let disposition = classifier.classify_lead(lead).disposition;
        match counts.iter_mut().find(|(d, _)| *d == disposition) {
            Some((_, n)) => *n += 1,
            None => counts.push((disposition, 1)),
        }
    }

    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = leads.len();
    counts
        .into_iter()
        .map(|(disposition, count)| DispositionCount {
            disposition,
            count,
            percent: percent_of(count, total),
        })
        .collect()
}

/// Headline numbers of the sales pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    pub total: usize,
    pub connected: usize,
    pub not_connected: usize,
    pub counts: TemperatureCounts,
}

impl PipelineSummary {
    pub fn from_leads<C>(classifier: &C, leads: &[Lead]) -> Self
    where
        C: RemarkClassifier + ?Sized,
    {
        let counts = TemperatureCounts::tally(classifier, leads);
        Self {
            total: counts.total(),
            connected: counts.connected(),
            not_connected: counts.dead,
            counts,
        }
    }

    /// Share of all leads in a tier, formatted to one decimal ("0.0" when there are no leads)
    pub fn total_share(&self, temperature: Temperature) -> String {
        format_percent(self.counts.get(temperature), self.total)
    }

    /// Share of connected leads in a tier, formatted to one decimal ("0.0" when none connected)
    pub fn connected_share(&self, temperature: Temperature) -> String {
        format_percent(self.counts.get(temperature), self.connected)
    }

    /// Share of all leads that were connected, formatted to one decimal
    pub fn connection_rate(&self) -> String {
        format_percent(self.connected, self.total)
    }
}

/// `n` as a percentage of `base`; 0 when `base` is 0
pub fn percent_of(n: usize, base: usize) -> f64 {
    if base == 0 {
        return 0.0;
    }
    (n as f64 / base as f64) * 100.0
}

/// `n` as a percentage of `base`, one decimal place
pub fn format_percent(n: usize, base: usize) -> String {
    format!("{:.1}", percent_of(n, base))
}

/// Errors turning dashboard filter inputs into a [`LeadFilter`]
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("unknown disposition '{0}'")]
    UnknownDisposition(String),

    #[error(transparent)]
    UnknownTemperature(#[from] ParseTemperatureError),
}

/// Lead selection by classification, assignee and reachable channel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub disposition: Option<String>,
    pub temperature: Option<Temperature>,
    pub assigned_to: Option<String>,
    /// Require the contact detail this channel sends to
    pub channel: Option<Channel>,
}

impl LeadFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse dashboard dropdown values, where `"all"` means unconstrained.
    ///
    /// Disposition labels are checked against the rule table so a typo
    /// surfaces as an error instead of an empty result.
    pub fn from_dashboard(
        table: &RuleTable,
        disposition: &str,
        temperature: &str,
        assigned_to: &str,
    ) -> Result<Self, FilterError> {
        let disposition = match constrained(disposition) {
            Some(label) if table.is_known_disposition(label) => Some(label.to_string()),
            Some(label) => return Err(FilterError::UnknownDisposition(label.to_string())),
            None => None,
        };

        let temperature = constrained(temperature)
            .map(str::parse::<Temperature>)
            .transpose()?;

        Ok(Self {
            disposition,
            temperature,
            assigned_to: constrained(assigned_to).map(str::to_string),
            channel: None,
        })
    }

    pub fn with_disposition(mut self, disposition: impl Into<String>) -> Self {
        self.disposition = Some(disposition.into());
        self
    }

    pub fn with_temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    pub fn for_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Whether a lead passes every set constraint
    pub fn matches<C>(&self, classifier: &C, lead: &Lead) -> bool
    where
        C: RemarkClassifier + ?Sized,
    {
        if let Some(channel) = self.channel {
            if !channel.reaches(lead) {
                return false;
            }
        }

        if let Some(assignee) = &self.assigned_to {
            if lead.assigned_to.as_deref() != Some(assignee.as_str()) {
                return false;
            }
        }

        if self.disposition.is_none() && self.temperature.is_none() {
            return true;
        }

        let classification = classifier.classify_lead(lead);

        if let Some(disposition) = &self.disposition {
            if classification.disposition != *disposition {
                return false;
            }
        }

        if let Some(temperature) = self.temperature {
            if classification.temperature != temperature {
                return false;
            }
        }

        true
    }
}

/// Leads that pass the filter, in input order
pub fn eligible_recipients<'a, C>(
    classifier: &C,
    leads: &'a [Lead],
    filter: &LeadFilter,
) -> Vec<&'a Lead>
where
    C: RemarkClassifier + ?Sized,
{
    let selected: Vec<&Lead> = leads
        .iter()
        .filter(|lead| filter.matches(classifier, lead))
        .collect();

    tracing::debug!(
        total = leads.len(),
        selected = selected.len(),
        channel = ?filter.channel,
        "Filtered leads"
    );

    selected
}

fn constrained(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL) {
        None
    } else {
        Some(value)
    }
}
