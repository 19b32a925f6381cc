use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, FieldErrors};
use crate::processing::translator::{self, Language};

use super::{json_body, required_text};

pub const MAX_TEXT_CHARS: usize = 500;

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub original_text: String,
    pub target_language: Language,
}

pub async fn translate(
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, AppError> {
    let req = json_body(payload)?;

    let mut errors = FieldErrors::new();
    let text = required_text(&mut errors, "text", req.text.as_deref(), MAX_TEXT_CHARS);
    let language = match req.target_language.as_deref() {
        None => {
            errors.insert("target_language", vec!["This field is required.".to_string()]);
            None
        }
        Some(name) => {
            let language = Language::ALL.into_iter().find(|l| l.as_str() == name);
            if language.is_none() {
                errors.insert(
                    "target_language",
                    vec![format!("\"{name}\" is not a valid choice.")],
                );
            }
            language
        }
    };

    let (Some(text), Some(language)) = (text, language) else {
        return Err(AppError::Validation(errors));
    };

    let translated_text = translator::translate_to(&text, language);
    tracing::debug!(language = language.as_str(), "Translated {text:?} -> {translated_text:?}");

    Ok(Json(TranslateResponse {
        translated_text,
        original_text: text,
        target_language: language,
    }))
}
