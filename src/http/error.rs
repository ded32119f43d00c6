use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::reconcile::ReconcileError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced at the request boundary. Everything maps to a status
/// code plus an `{"error": message}` JSON body; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ReconcileError> for ApiError {
    fn from(err: ReconcileError) -> Self {
        let message = err.to_string();
        match err {
            ReconcileError::StudentNotFound(_) | ReconcileError::RecordNotFound(_) => {
                ApiError::NotFound(message)
            }
            ReconcileError::DuplicateAttendance { .. } => ApiError::Conflict(message),
        }
    }
}
