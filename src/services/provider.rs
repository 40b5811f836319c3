// src/services/provider.rs
use async_trait::async_trait;

use crate::error::ProviderResult;

/// A generative text model reachable by name.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Send a single prompt to `model` and return its text output.
    async fn generate(&self, model: &str, prompt: &str) -> ProviderResult;
}
