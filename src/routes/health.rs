use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "status": "OK",
        "timestamp": crate::utils::time::now(),
        "uptimeSeconds": state.started_at.elapsed().as_secs(),
        "environment": state.environment.as_str(),
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn index() -> impl IntoResponse {
    let body = json!({
        "message": "Online Quiz API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "quizzes": "/api/quizzes",
            "openapi": "/api-docs/openapi.json",
        },
    });
    (StatusCode::OK, Json(body))
}

pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    let body = json!({
        "error": format!("Route {} {} not found", method, uri.path()),
        "code": "NOT_FOUND",
        "details": format!("The requested route {} {} does not exist", method, uri.path()),
    });
    (StatusCode::NOT_FOUND, Json(body))
}
