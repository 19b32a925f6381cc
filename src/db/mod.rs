pub mod memory;
pub mod reports;

use async_trait::async_trait;

use crate::models::{NewReport, Outcome, Report, Severity};

pub use memory::MemoryReportStore;
pub use reports::PgReportStore;

/// Optional narrowing for report listings. The default filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub severity: Option<Severity>,
    pub outcome: Option<Outcome>,
    /// Case-insensitive substring of the drug or the original text.
    pub search: Option<String>,
}

impl ReportFilter {
    pub fn matches(&self, report: &Report) -> bool {
        if self.severity.is_some_and(|s| s != report.severity) {
            return false;
        }
        if self.outcome.is_some_and(|o| o != report.outcome) {
            return false;
        }
        match &self.search {
            Some(search) => {
                let needle = search.to_lowercase();
                report.drug.to_lowercase().contains(&needle)
                    || report.original_report.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

/// Persistence for processed reports. Listings are newest first.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn save(&self, report: &NewReport) -> Result<Report, sqlx::Error>;
    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, sqlx::Error>;
    async fn get(&self, id: i64) -> Result<Option<Report>, sqlx::Error>;
    /// Returns whether a report was removed.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;

    async fn list_all(&self) -> Result<Vec<Report>, sqlx::Error> {
        self.list(&ReportFilter::default()).await
    }
}
