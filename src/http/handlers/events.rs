use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::http::error::{ApiError, ApiResult};
use crate::http::types::AppState;
use crate::store::Event;

#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    title: String,
    date: NaiveDate,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.with_store(|store| store.events().to_vec()))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateEvent>, JsonRejection>,
) -> ApiResult<Json<Event>> {
    let Json(req) = payload.map_err(|_| missing_fields())?;
    let title = req.title.trim();
    if title.is_empty() {
        return Err(missing_fields());
    }
    let event = state.with_store(|store| store.add_event(title.to_string(), req.date));
    info!(event_id = event.id, "event created");
    Ok(Json(event))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<u64>) -> Json<Value> {
    state.with_store(|store| store.remove_event(id));
    info!(event_id = id, "event deleted");
    Json(json!({ "success": true }))
}

fn missing_fields() -> ApiError {
    ApiError::BadRequest("Title and date are required".to_string())
}
