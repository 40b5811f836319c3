// src/routes/mod.rs
pub mod chat;
pub mod status;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use status::{health_handler, root_handler, test_gemini_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .route("/test-gemini", get(test_gemini_handler))
        .layer(TraceLayer::new_for_http())
}

/// Router with state and the open CORS policy applied, ready to serve.
pub fn create_app(state: SharedState) -> Router {
    // Any origin, method and header, with credentials. The request origin
    // is mirrored since `*` is not allowed together with credentials.
    let cors = CorsLayer::very_permissive();

    create_router().with_state(state).layer(cors)
}
