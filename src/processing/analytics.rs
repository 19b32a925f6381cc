use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::Report;

pub const TOP_N: usize = 10;

/// Value counts kept in first-seen order. Serializes as a JSON object whose
/// key order is the entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Counts {
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    /// The `n` most frequent keys. The sort is stable, so equal counts keep
    /// first-seen order.
    pub fn top(&self, n: usize) -> Counts {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (k, _))| (k.clone(), i))
            .collect();
        Counts { entries, index }
    }
}

impl Serialize for Counts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Analytics {
    pub total_reports: u64,
    pub severity_distribution: Counts,
    pub outcome_distribution: Counts,
    pub common_adverse_events: Counts,
    pub common_drugs: Counts,
}

pub fn aggregate(reports: &[Report]) -> Analytics {
    let mut severity = Counts::default();
    let mut outcome = Counts::default();
    let mut events = Counts::default();
    let mut drugs = Counts::default();

    for report in reports {
        severity.add(report.severity.as_str());
        outcome.add(report.outcome.as_str());
        for event in &report.adverse_events {
            events.add(event);
        }
        drugs.add(&report.drug);
    }

    Analytics {
        total_reports: reports.len() as u64,
        severity_distribution: severity,
        outcome_distribution: outcome,
        common_adverse_events: events.top(TOP_N),
        common_drugs: drugs.top(TOP_N),
    }
}
