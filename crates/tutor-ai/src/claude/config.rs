//! Claude API client configuration.

use std::fmt;

use crate::AiError;

const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Claude API client configuration.
///
/// Requests authenticate with an Anthropic API key sent as `x-api-key`.
#[derive(Clone)]
pub struct ClaudeConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f64>,
    pub timeout_secs: u64,
}

impl fmt::Debug for ClaudeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaudeConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClaudeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1024,
            temperature: None,
            timeout_secs: 120,
        }
    }

    /// Create config from `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self, AiError> {
        Self::from_key(std::env::var(API_KEY_VAR).ok())
    }

    /// An unset or blank key is a configuration error, not a request-time 401.
    pub(crate) fn from_key(key: Option<String>) -> Result<Self, AiError> {
        key.filter(|k| !k.trim().is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                AiError::NotConfigured(format!("{API_KEY_VAR} is not set (add it to .env)"))
            })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f64>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
