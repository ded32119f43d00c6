use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::http::error::{ApiError, ApiResult};
use crate::http::types::AppState;
use crate::reconcile::{self, GradeSubmission};
use crate::store::GradeRecord;

#[derive(Debug, Serialize)]
pub struct GradeSubmissionResponse {
    pub message: String,
    pub updated: Vec<GradeRecord>,
    pub skipped: Vec<u64>,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<GradeRecord>> {
    Json(state.with_store(|store| store.grades().to_vec()))
}

pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<Vec<GradeSubmission>>, JsonRejection>,
) -> ApiResult<Json<GradeSubmissionResponse>> {
    let Json(batch) = payload
        .map_err(|_| ApiError::BadRequest("Expected an array of { id, grade } objects".to_string()))?;
    let outcome = state.with_store(|store| reconcile::submit_grades(store, batch));
    info!(
        updated = outcome.updated.len(),
        skipped = outcome.skipped.len(),
        "grades submitted"
    );
    Ok(Json(GradeSubmissionResponse {
        message: "Grades submitted successfully".to_string(),
        updated: outcome.updated,
        skipped: outcome.skipped,
    }))
}
