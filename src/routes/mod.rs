pub mod analytics;
pub mod index;
pub mod reports;
pub mod translate;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::error::{AppError, FieldErrors};
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index::index))
        .route("/process-report", post(reports::process))
        .route("/reports", get(reports::list))
        .route("/reports/{id}", get(reports::get).delete(reports::delete))
        .route("/translate", post(translate::translate))
        .route("/analytics", get(analytics::summary))
}

/// Unwrap a JSON body, turning parse failures into a 400 with the parser message.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwrap query parameters, turning parse failures into a 400 with the parser message.
pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Validate a required text field: trimmed, non-blank, at most `max_chars` characters.
/// Records a message under `field` and returns `None` on failure.
pub(crate) fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<&str>,
    max_chars: usize,
) -> Option<String> {
    let Some(value) = value else {
        errors
            .entry(field)
            .or_default()
            .push("This field is required.".to_string());
        return None;
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors
            .entry(field)
            .or_default()
            .push("This field may not be blank.".to_string());
        return None;
    }

    if trimmed.chars().count() > max_chars {
        errors
            .entry(field)
            .or_default()
            .push(format!("Ensure this field has no more than {max_chars} characters."));
        return None;
    }

    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims() {
        let mut errors = FieldErrors::new();
        let value = required_text(&mut errors, "report", Some("  mild rash \n"), 10);
        assert_eq!(value.as_deref(), Some("mild rash"));
        assert!(errors.is_empty());
    }

    #[test]
    fn required_text_reports_missing_and_blank() {
        let mut errors = FieldErrors::new();
        assert!(required_text(&mut errors, "report", None, 10).is_none());
        assert!(required_text(&mut errors, "text", Some("   "), 10).is_none());
        assert_eq!(errors["report"], vec!["This field is required."]);
        assert_eq!(errors["text"], vec!["This field may not be blank."]);
    }

    #[test]
    fn required_text_counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        assert!(required_text(&mut errors, "text", Some("éééé"), 4).is_some());
        assert!(required_text(&mut errors, "text", Some("ééééé"), 4).is_none());
        assert_eq!(
            errors["text"],
            vec!["Ensure this field has no more than 4 characters."]
        );
    }
}
