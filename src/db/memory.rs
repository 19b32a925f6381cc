use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{NewReport, Report};

use super::{ReportFilter, ReportStore};

/// In-process store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryReportStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    reports: Vec<Report>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn save(&self, report: &NewReport) -> Result<Report, sqlx::Error> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let saved = Report {
            id: inner.next_id,
            original_report: report.original_report.clone(),
            drug: report.drug.clone(),
            adverse_events: report.adverse_events.clone(),
            severity: report.severity,
            outcome: report.outcome,
            created_at: Utc::now(),
        };
        inner.reports.push(saved.clone());
        Ok(saved)
    }

    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner
            .reports
            .iter()
            .rev()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Report>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner.reports.iter().find(|r| r.id == id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let before = inner.reports.len();
        inner.reports.retain(|r| r.id != id);
        Ok(inner.reports.len() != before)
    }
}
