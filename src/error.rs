// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single call to the text model.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("request to the model provider timed out")]
    Timeout,

    #[error("request to the model provider failed: {0}")]
    Transport(String),

    #[error("model provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("prompt was blocked by the model provider: {0}")]
    Blocked(String),

    #[error("model provider returned no text")]
    EmptyResponse,

    #[error("could not decode model provider response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// Failure surfaced by the outer layer of the chat handler as `success: false`.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Relay(String),
}

impl From<tokio::task::JoinError> for HandlerError {
    fn from(err: tokio::task::JoinError) -> Self {
        HandlerError::Relay(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("invalid listen address {0:?}")]
    InvalidAddress(String),

    #[error("failed to read persona from {path}: {source}")]
    Persona {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("persona file {0} is empty")]
    EmptyPersona(PathBuf),
}

pub type ProviderResult = Result<String, ProviderError>;
pub type HandlerResult = Result<crate::message::ChatResponse, HandlerError>;
