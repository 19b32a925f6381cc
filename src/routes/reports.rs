use std::net::SocketAddr;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{ConnectInfo, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AdminToken;
use crate::client_ip;
use crate::db::ReportFilter;
use crate::error::{AppError, FieldErrors};
use crate::models::{Outcome, Report, Severity};
use crate::processing::pipeline;
use crate::state::SharedState;

use super::{json_body, query_params, required_text};

pub const MAX_REPORT_CHARS: usize = 10_000;

#[derive(Deserialize)]
pub struct ProcessReport {
    pub report: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessedReport {
    pub drug: String,
    pub adverse_events: Vec<String>,
    pub severity: Severity,
    pub outcome: Outcome,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub severity: Option<String>,
    pub outcome: Option<String>,
    pub search: Option<String>,
}

#[derive(Serialize)]
pub struct ReportList {
    pub reports: Vec<Report>,
}

pub async fn process(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<ProcessReport>, JsonRejection>,
) -> Result<(StatusCode, Json<ProcessedReport>), AppError> {
    let ip = client_ip::resolve(&headers, addr.ip(), &state.config.trusted_proxies);
    state
        .submission_limiter
        .check(ip)
        .map_err(AppError::RateLimited)?;

    let req = json_body(payload)?;

    let mut errors = FieldErrors::new();
    let Some(text) = required_text(&mut errors, "report", req.report.as_deref(), MAX_REPORT_CHARS)
    else {
        return Err(AppError::Validation(errors));
    };

    let report = pipeline::process(state.store.as_ref(), &text).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProcessedReport {
            drug: report.drug,
            adverse_events: report.adverse_events,
            severity: report.severity,
            outcome: report.outcome,
        }),
    ))
}

pub async fn list(
    State(state): State<SharedState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ReportList>, AppError> {
    let params = query_params(query)?;
    let mut errors = FieldErrors::new();

    let severity = params.severity.as_deref().and_then(|s| {
        let parsed = Severity::parse(s);
        if parsed.is_none() {
            errors.insert("severity", vec![format!("\"{s}\" is not a valid choice.")]);
        }
        parsed
    });
    let outcome = params.outcome.as_deref().and_then(|o| {
        let parsed = Outcome::parse(o);
        if parsed.is_none() {
            errors.insert("outcome", vec![format!("\"{o}\" is not a valid choice.")]);
        }
        parsed
    });

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let filter = ReportFilter {
        severity,
        outcome,
        search: params.search.filter(|s| !s.trim().is_empty()),
    };

    let reports = state.store.list(&filter).await?;
    Ok(Json(ReportList { reports }))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Report>, AppError> {
    let id = parse_id(&id)?;
    let report = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;
    Ok(Json(report))
}

pub async fn delete(
    _admin: AdminToken,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_id(&id)?;
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound("Report not found".to_string()));
    }

    tracing::info!("Report #{id} deleted");
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}

/// Report ids are positive integers; anything else cannot name a report.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound("Report not found".to_string()))
}
