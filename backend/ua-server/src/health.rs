use std::time::SystemTime;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - liveness of the bundle server
pub async fn health_check() -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": humantime::format_rfc3339_seconds(SystemTime::now()).to_string(),
    });

    (StatusCode::OK, Json(health)).into_response()
}
