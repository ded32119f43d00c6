use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::http::error::{ApiError, ApiResult};
use crate::http::types::AppState;
use crate::reconcile::{self, AttendancePatch, AttendanceView};

#[derive(Debug, Deserialize)]
pub struct CreateAttendance {
    student_id: u64,
    present: bool,
    date: NaiveDate,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<AttendanceView>> {
    Json(state.with_store(|store| reconcile::attendance_roster(store)))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateAttendance>, JsonRejection>,
) -> ApiResult<Json<AttendanceView>> {
    let Json(req) = payload.map_err(|_| bad_payload())?;
    let view = state.with_store(|store| {
        let record = reconcile::record_attendance(store, req.student_id, req.present, req.date)?;
        Ok::<_, ApiError>(AttendanceView::project(store, &record))
    })?;
    info!(
        attendance_id = view.id,
        student_id = view.student_id,
        "attendance recorded"
    );
    Ok(Json(view))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: Result<Json<AttendancePatch>, JsonRejection>,
) -> ApiResult<Json<AttendanceView>> {
    let Json(patch) = payload.map_err(|_| bad_payload())?;
    let view = state.with_store(|store| {
        let record = reconcile::update_attendance(store, id, patch)?;
        Ok::<_, ApiError>(AttendanceView::project(store, &record))
    })?;
    info!(attendance_id = id, "attendance updated");
    Ok(Json(view))
}

fn bad_payload() -> ApiError {
    ApiError::BadRequest("Missing required fields or wrong data types".to_string())
}
