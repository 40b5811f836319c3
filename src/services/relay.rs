// src/services/relay.rs
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::provider::TextModel;
use crate::{
    config::Config,
    error::{HandlerError, HandlerResult, ProviderError, ProviderResult},
    message::{ChatResponse, ProbeResponse},
    persona::Persona,
};

pub const PROBE_PROMPT: &str = "Say 'Gemini is working' in a creative way.";
pub const PROBE_OK_MESSAGE: &str = "Gemini API is connected successfully";
pub const PROBE_FAILED_MESSAGE: &str = "Gemini API connection failed";

/// Relays chat messages to the text model with the persona prepended.
///
/// Failures are handled in two layers:
/// - the provider layer (`ProviderResult`) turns any model failure into an
///   apology reply, still reported as `success: true`;
/// - the handler layer (`HandlerResult`) reports validation errors and
///   anything the provider layer could not absorb as `success: false`.
#[derive(Clone)]
pub struct ChatRelay {
    model: Arc<dyn TextModel>,
    persona: Persona,
    chat_model: Arc<str>,
    probe_model: Arc<str>,
}

impl ChatRelay {
    pub fn new(
        model: Arc<dyn TextModel>,
        persona: Persona,
        chat_model: impl Into<Arc<str>>,
        probe_model: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            model,
            persona,
            chat_model: chat_model.into(),
            probe_model: probe_model.into(),
        }
    }

    pub fn from_config(config: &Config, model: Arc<dyn TextModel>, persona: Persona) -> Self {
        Self::new(
            model,
            persona,
            config.chat_model.as_str(),
            config.probe_model.as_str(),
        )
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Provider layer: one model call with the composed prompt.
    pub async fn provider_reply(&self, message: &str) -> ProviderResult {
        let prompt = self.persona.compose(message);
        self.model.generate(&self.chat_model, &prompt).await
    }

    /// Apology returned in place of a reply when the model call fails.
    pub fn fallback_reply(err: &ProviderError) -> String {
        format!("I apologize, but I'm experiencing technical difficulties. Error: {err}")
    }

    async fn reply_or_apology(&self, message: &str) -> String {
        match self.provider_reply(message).await {
            Ok(text) => text,
            Err(err) => {
                warn!(model = %self.chat_model, error = %err, "model call failed, sending fallback reply");
                Self::fallback_reply(&err)
            }
        }
    }

    /// Handler layer: validate, then run the provider layer in its own task.
    pub async fn handle(&self, message: String) -> HandlerResult {
        if message.trim().is_empty() {
            return Err(HandlerError::EmptyMessage);
        }

        let relay = self.clone();
        let mut task = AbortOnDrop(tokio::spawn(async move {
            relay.reply_or_apology(&message).await
        }));
        let reply = (&mut task.0).await?;

        Ok(ChatResponse::reply(reply))
    }

    /// Always yields an envelope; errors from `handle` become `success: false`.
    pub async fn submit_message(&self, message: String) -> ChatResponse {
        match self.handle(message).await {
            Ok(envelope) => envelope,
            Err(err) => {
                match &err {
                    HandlerError::Relay(_) => error!(error = %err, "chat relay failed"),
                    _ => debug!(error = %err, "chat request rejected"),
                }
                ChatResponse::failure(err.to_string())
            }
        }
    }

    /// Connectivity check against the probe model, independent of the persona.
    pub async fn probe(&self) -> ProbeResponse {
        match self.model.generate(&self.probe_model, PROBE_PROMPT).await {
            Ok(text) => {
                info!(model = %self.probe_model, "model probe succeeded");
                ProbeResponse {
                    success: true,
                    message: PROBE_OK_MESSAGE.to_string(),
                    response: Some(text),
                    error: None,
                }
            }
            Err(err) => {
                warn!(model = %self.probe_model, error = %err, "model probe failed");
                ProbeResponse {
                    success: false,
                    message: PROBE_FAILED_MESSAGE.to_string(),
                    response: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

/// Aborts the model call if the request future is dropped first.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}
