#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use aqi_chatbot_backend::config::Config;
use aqi_chatbot_backend::error::{ProviderError, ProviderResult};
use aqi_chatbot_backend::persona::Persona;
use aqi_chatbot_backend::routes::create_app;
use aqi_chatbot_backend::services::provider::TextModel;
use aqi_chatbot_backend::state::AppState;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Records every call and answers according to `behavior`.
pub struct FakeModel {
    pub calls: Mutex<Vec<(String, String)>>,
    behavior: Behavior,
}

pub enum Behavior {
    Reply(String),
    Fail(fn() -> ProviderError),
    /// Echo the text after the user question separator, after a delay
    /// derived from its length.
    EchoQuestion,
    Panic,
}

impl FakeModel {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            behavior,
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(Behavior::Reply(text.to_string()))
    }

    pub fn failing(err: fn() -> ProviderError) -> Arc<Self> {
        Self::new(Behavior::Fail(err))
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for FakeModel {
    async fn generate(&self, model: &str, prompt: &str) -> ProviderResult {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail(err) => Err(err()),
            Behavior::EchoQuestion => {
                let question = prompt
                    .rsplit_once("User Question: ")
                    .map(|(_, q)| q.to_string())
                    .unwrap_or_default();
                let delay = 5 + (question.len() as u64 * 7) % 40;
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok(format!("answer to {question}"))
            }
            Behavior::Panic => panic!("model exploded"),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        gemini_api_key: Some("test-key".to_string()),
        ..Config::default()
    }
}

pub fn app_with(model: Arc<dyn TextModel>, persona: Persona) -> Router {
    let state = Arc::new(AppState::new(&test_config(), model, persona));
    create_app(state)
}

pub fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
