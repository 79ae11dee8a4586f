pub mod error;
pub mod routes;
pub mod timezone;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::ax_state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/route-match", get(routes::route_match))
        .route("/api/timezone", get(timezone::timezone_lookup))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
