use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::http::error::{ApiError, ApiResult};
use crate::http::types::AppState;
use crate::store::Student;

#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    name: String,
    grade: String,
    parent: String,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.with_store(|store| store.students().to_vec()))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudent>, JsonRejection>,
) -> ApiResult<Json<Student>> {
    let Json(req) = payload.map_err(|_| missing_fields())?;
    let name = req.name.trim();
    let grade = req.grade.trim();
    let parent = req.parent.trim();
    if name.is_empty() || grade.is_empty() || parent.is_empty() {
        return Err(missing_fields());
    }
    let student = state.with_store(|store| {
        store.add_student(name.to_string(), grade.to_string(), parent.to_string())
    });
    info!(student_id = student.id, "student created");
    Ok(Json(student))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Value> {
    state.with_store(|store| store.remove_student(id));
    info!(student_id = id, "student deleted");
    Json(json!({ "success": true }))
}

fn missing_fields() -> ApiError {
    ApiError::BadRequest("Name, grade, and parent are required".to_string())
}
