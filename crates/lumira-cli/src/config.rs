use std::time::Duration;
use thiserror::Error;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("LUMIRA_API_KEY is not set — an API credential is required to start")]
    MissingApiKey,
}

/// Client configuration, loaded from environment variables.
pub struct Config {
    /// API credential. Required; absence is fatal at startup.
    pub api_key: String,
    /// Model identifier (default: gemini-2.5-flash).
    pub model: String,
    /// Base URL of the generateContent API.
    pub api_base: String,
    /// Per-request timeout for the model call.
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from `LUMIRA_*` environment variables.
    ///
    /// Everything except the API key has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("LUMIRA_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            api_key,
            model: env_or("LUMIRA_MODEL", DEFAULT_MODEL),
            api_base: env_or("LUMIRA_API_BASE", DEFAULT_API_BASE),
            timeout: Duration::from_secs(env_u64("LUMIRA_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
