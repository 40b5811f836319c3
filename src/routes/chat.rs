// src/routes/chat.rs
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::warn;

use crate::{
    error::HandlerError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// `POST /chat`. Always answers 200 with an envelope, even for bodies that
/// fail to parse.
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "invalid chat request body");
            let err = HandlerError::InvalidRequest(rejection.body_text());
            return Json(ChatResponse::failure(err.to_string()));
        }
    };

    Json(state.relay.submit_message(payload.message).await)
}
