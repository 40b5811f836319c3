// src/routes/status.rs
use axum::{Json, extract::State};

use crate::{
    message::{HealthStatus, ProbeResponse, StatusMessage},
    state::SharedState,
};

pub const RUNNING_MESSAGE: &str = "AQI Chatbot API with Gemini is running!";

pub async fn root_handler() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: RUNNING_MESSAGE.to_string(),
    })
}

pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
    })
}

/// `GET /test-gemini`: one fixed prompt against the probe model.
pub async fn test_gemini_handler(State(state): State<SharedState>) -> Json<ProbeResponse> {
    Json(state.relay.probe().await)
}
