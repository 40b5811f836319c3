// src/config.rs
use std::{fmt, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::error::ConfigError;

pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_PROBE_MODEL: &str = "gemini-pro";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub chat_model: String,
    /// Model used by the connectivity probe. Kept separate from `chat_model`.
    pub probe_model: String,
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub persona_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            probe_model: DEFAULT_PROBE_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            persona_path: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("chat_model", &self.chat_model)
            .field("probe_model", &self.probe_model)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("persona_path", &self.persona_path)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let timeout_secs = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => parse_number::<u64>("GEMINI_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let port = match get("PORT") {
            Some(raw) => parse_number::<u16>("PORT", &raw)?,
            None => defaults.port,
        };

        Ok(Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            chat_model: get("GEMINI_CHAT_MODEL").unwrap_or(defaults.chat_model),
            probe_model: get("GEMINI_PROBE_MODEL").unwrap_or(defaults.probe_model),
            api_base_url: get("GEMINI_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            request_timeout: Duration::from_secs(timeout_secs),
            persona_path: get("PERSONA_PATH").map(PathBuf::from),
            host: get("HOST").unwrap_or(defaults.host),
            port,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}

fn parse_number<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}
