use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use campusd::http::{build_router, AppState};
use campusd::store::Store;

fn app() -> Router {
    build_router(AppState::new(Store::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };
    let response = app.clone().oneshot(request).await.expect("route request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse response json")
    };
    (status, value)
}

#[tokio::test]
async fn students_create_list_delete_roundtrip() {
    let app = app();

    let (status, student) = send(
        &app,
        "POST",
        "/students",
        Some(json!({ "name": "  Ann  ", "grade": "B", "parent": "Sue" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["id"], 1);
    assert_eq!(student["name"], "Ann", "string fields are trimmed");

    let (status, listed) = send(&app, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().expect("array").len(), 1);

    let (status, deleted) = send(&app, "DELETE", "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "success": true }));

    // Deleting an absent id still reports success.
    let (status, deleted) = send(&app, "DELETE", "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "success": true }));

    let (_, listed) = send(&app, "GET", "/students", None).await;
    assert!(listed.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn student_ids_are_not_reused_after_delete() {
    let app = app();

    let (_, first) = send(
        &app,
        "POST",
        "/students",
        Some(json!({ "name": "Ann", "grade": "B", "parent": "Sue" })),
    )
    .await;
    assert_eq!(first["id"], 1);

    let (status, _) = send(&app, "DELETE", "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, second) = send(
        &app,
        "POST",
        "/students",
        Some(json!({ "name": "Ben", "grade": "C", "parent": "Tom" })),
    )
    .await;
    assert_eq!(second["id"], 2, "deleted id must not be reassigned");
}

#[tokio::test]
async fn student_creation_requires_all_fields() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/students",
        Some(json!({ "name": "Ann", "grade": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name, grade, and parent are required");

    let (status, body) = send(
        &app,
        "POST",
        "/students",
        Some(json!({ "name": "   ", "grade": "B", "parent": "Sue" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name, grade, and parent are required");

    let (_, listed) = send(&app, "GET", "/students", None).await;
    assert!(listed.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn teachers_create_list_delete_roundtrip() {
    let app = app();

    let (status, teacher) = send(
        &app,
        "POST",
        "/teachers",
        Some(json!({ "name": "Mr. Smith", "subject": " Math " })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(teacher["id"], 1);
    assert_eq!(teacher["subject"], "Math");

    let (status, body) = send(&app, "POST", "/teachers", Some(json!({ "name": "Ms. Lee" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name and subject are required");

    let (status, deleted) = send(&app, "DELETE", "/teachers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "success": true }));

    let (_, listed) = send(&app, "GET", "/teachers", None).await;
    assert!(listed.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn events_create_list_delete_roundtrip() {
    let app = app();

    let (status, event) = send(
        &app,
        "POST",
        "/events",
        Some(json!({ "title": "Science Fair", "date": "2025-10-05" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["id"], 1);
    assert_eq!(event["date"], "2025-10-05");

    let (status, body) = send(&app, "POST", "/events", Some(json!({ "title": "Sports Day" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title and date are required");

    let (_, listed) = send(&app, "GET", "/events", None).await;
    assert_eq!(listed.as_array().expect("array").len(), 1);

    let (status, deleted) = send(&app, "DELETE", "/events/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "success": true }));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
