// src/persona.rs
//! The AQI Vaani persona prepended to every chat message.

use std::{fmt, path::Path, sync::Arc};

use crate::error::ConfigError;

/// Built-in persona, used when no `PERSONA_PATH` is configured.
pub const DEFAULT_PERSONA: &str = include_str!("../persona/aqi_vaani.txt");

/// Separator between the persona and the user's message.
pub const USER_QUESTION_SEPARATOR: &str = "\n\nUser Question: ";

/// Immutable persona text, cheap to clone across requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Persona(Arc<str>);

impl Persona {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    pub fn builtin() -> Self {
        Self::new(DEFAULT_PERSONA)
    }

    /// Load the persona from disk. The text is used exactly as stored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Persona {
            path: path.to_path_buf(),
            source,
        })?;
        if text.trim().is_empty() {
            return Err(ConfigError::EmptyPersona(path.to_path_buf()));
        }
        Ok(Self::new(text))
    }

    /// `PERSONA_PATH` if set, the built-in persona otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full prompt sent to the model. The message is appended untrimmed.
    pub fn compose(&self, message: &str) -> String {
        let mut prompt =
            String::with_capacity(self.0.len() + USER_QUESTION_SEPARATOR.len() + message.len());
        prompt.push_str(&self.0);
        prompt.push_str(USER_QUESTION_SEPARATOR);
        prompt.push_str(message);
        prompt
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persona").field("len", &self.0.len()).finish()
    }
}
