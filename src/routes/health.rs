use axum::{http::StatusCode, response::IntoResponse, Json};

/// Root path - service banner
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "gridlock",
        "status": "ok"
    }))
}

/// Health check endpoint
///
/// # Returns
///
/// JSON response with status
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}
