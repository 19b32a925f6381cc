use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewReport, Report};

use super::{ReportFilter, ReportStore};

pub async fn create(pool: &PgPool, report: &NewReport) -> Result<Report, sqlx::Error> {
    sqlx::query_as::<_, Report>(
        "INSERT INTO reports (original_report, drug, adverse_events, severity, outcome)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&report.original_report)
    .bind(&report.drug)
    .bind(&report.adverse_events)
    .bind(report.severity)
    .bind(report.outcome)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Report>, sqlx::Error> {
    sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list(pool: &PgPool, filter: &ReportFilter) -> Result<Vec<Report>, sqlx::Error> {
    let search_pattern = filter
        .search
        .as_ref()
        .map(|s| format!("%{}%", escape_like(s)));

    sqlx::query_as::<_, Report>(
        "SELECT * FROM reports
         WHERE ($1::severity IS NULL OR severity = $1)
           AND ($2::outcome IS NULL OR outcome = $2)
           AND ($3::text IS NULL OR drug ILIKE $3 ESCAPE '\\' OR original_report ILIKE $3 ESCAPE '\\')
         ORDER BY created_at DESC, id DESC",
    )
    .bind(filter.severity)
    .bind(filter.outcome)
    .bind(search_pattern)
    .fetch_all(pool)
    .await
}

/// Escape LIKE wildcards so the search text matches literally.
fn escape_like(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reports WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn save(&self, report: &NewReport) -> Result<Report, sqlx::Error> {
        create(&self.pool, report).await
    }

    async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>, sqlx::Error> {
        list(&self.pool, filter).await
    }

    async fn get(&self, id: i64) -> Result<Option<Report>, sqlx::Error> {
        find_by_id(&self.pool, id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        delete(&self.pool, id).await
    }
}
