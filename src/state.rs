// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::persona::Persona;
use crate::services::provider::TextModel;
use crate::services::relay::ChatRelay;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: ChatRelay,
}

impl AppState {
    pub fn new(config: &Config, model: Arc<dyn TextModel>, persona: Persona) -> Self {
        Self {
            relay: ChatRelay::from_config(config, model, persona),
        }
    }
}
