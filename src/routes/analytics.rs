use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::processing::analytics::{self, Analytics};
use crate::state::SharedState;

pub async fn summary(State(state): State<SharedState>) -> Result<Json<Analytics>, AppError> {
    let reports = state.store.list_all().await?;
    Ok(Json(analytics::aggregate(&reports)))
}
