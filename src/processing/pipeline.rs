use crate::db::ReportStore;
use crate::models::Report;

use super::extractor;

/// Extract fields from the report text and persist the result.
pub async fn process(store: &dyn ReportStore, text: &str) -> Result<Report, sqlx::Error> {
    let extracted = extractor::extract(text);
    tracing::debug!(
        drug = %extracted.drug,
        severity = %extracted.severity,
        outcome = %extracted.outcome,
        events = extracted.adverse_events.len(),
        "Extracted report fields"
    );

    let report = store.save(&extracted).await?;
    tracing::info!("Stored {report}, events: {}", report.adverse_events_list());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryReportStore;
    use crate::models::{Outcome, Severity};

    #[tokio::test]
    async fn stores_extracted_fields_with_text() {
        let store = MemoryReportStore::new();
        let text = "Patient experienced severe nausea and headache after taking Drug X. Patient recovered.";
        let report = process(&store, text).await.unwrap();

        assert_eq!(report.id, 1);
        assert_eq!(report.original_report, text);
        assert_eq!(report.drug, "Drug X");
        assert_eq!(report.severity, Severity::Severe);
        assert_eq!(report.outcome, Outcome::Recovered);
        assert_eq!(report.adverse_events, vec!["nausea", "headache", "pain"]);

        let stored = store.get(report.id).await.unwrap().unwrap();
        assert_eq!(stored.drug, report.drug);
    }
}
