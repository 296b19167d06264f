use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::models::TemperatureResponse;
use crate::state::AppState;

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// Echo the posted temperature payload without looking inside it.
pub async fn echo_temperatures(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Json<TemperatureResponse> {
    tracing::debug!(shape = ?state.shape, "echoing temperature payload");
    Json(TemperatureResponse::new(state.shape, payload))
}
