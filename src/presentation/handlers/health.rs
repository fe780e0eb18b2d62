use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_status: String,
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let model_status = if state.assistant.model_available() {
        "available"
    } else {
        "unavailable"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            model_status: model_status.to_string(),
            timestamp: chrono::Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        }),
    )
}
