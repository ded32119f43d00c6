use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::http::error::{ApiError, ApiResult};
use crate::http::types::AppState;
use crate::store::Teacher;

#[derive(Debug, Deserialize)]
pub struct CreateTeacher {
    name: String,
    subject: String,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Teacher>> {
    Json(state.with_store(|store| store.teachers().to_vec()))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeacher>, JsonRejection>,
) -> ApiResult<Json<Teacher>> {
    let Json(req) = payload.map_err(|_| missing_fields())?;
    let name = req.name.trim();
    let subject = req.subject.trim();
    if name.is_empty() || subject.is_empty() {
        return Err(missing_fields());
    }
    let teacher =
        state.with_store(|store| store.add_teacher(name.to_string(), subject.to_string()));
    info!(teacher_id = teacher.id, "teacher created");
    Ok(Json(teacher))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Value> {
    state.with_store(|store| store.remove_teacher(id));
    info!(teacher_id = id, "teacher deleted");
    Json(json!({ "success": true }))
}

fn missing_fields() -> ApiError {
    ApiError::BadRequest("Name and subject are required".to_string())
}
