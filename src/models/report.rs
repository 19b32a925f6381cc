use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "severity", rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    Recovered,
    Ongoing,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Recovered, Outcome::Ongoing, Outcome::Fatal];

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Recovered => "recovered",
            Outcome::Ongoing => "ongoing",
            Outcome::Fatal => "fatal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A processed adverse-event report as stored.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub original_report: String,
    pub drug: String,
    pub adverse_events: Vec<String>,
    pub severity: Severity,
    pub outcome: Outcome,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Adverse events joined for display, `None` when there are none.
    pub fn adverse_events_list(&self) -> String {
        if self.adverse_events.is_empty() {
            "None".to_string()
        } else {
            self.adverse_events.join(", ")
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Report #{} - {} ({})", self.id, self.drug, self.severity)
    }
}

/// Extracted fields plus the source text, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub original_report: String,
    pub drug: String,
    pub adverse_events: Vec<String>,
    pub severity: Severity,
    pub outcome: Outcome,
}
