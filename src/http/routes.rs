use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::types::AppState;

/// Assembles the full HTTP surface. CORS stays wide open: the dashboard
/// frontend is served from a different origin.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/students",
            get(handlers::students::list).post(handlers::students::create),
        )
        .route("/students/:id", delete(handlers::students::remove))
        .route(
            "/teachers",
            get(handlers::teachers::list).post(handlers::teachers::create),
        )
        .route("/teachers/:id", delete(handlers::teachers::remove))
        .route(
            "/attendance",
            get(handlers::attendance::list).post(handlers::attendance::create),
        )
        .route("/attendance/:id", put(handlers::attendance::update))
        .route(
            "/grades",
            get(handlers::grades::list).post(handlers::grades::submit),
        )
        .route(
            "/events",
            get(handlers::events::list).post(handlers::events::create),
        )
        .route("/events/:id", delete(handlers::events::remove))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
