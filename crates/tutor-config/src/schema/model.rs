//! Chat-model provider configuration.

use serde::{Deserialize, Serialize};

/// Hosted chat-completion provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Claude,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Claude => "claude",
        }
    }
}

/// Model selection and request limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub provider: ProviderKind,
    pub model: String,
    /// Completion budget per reply (valid range: 1-16384).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0). Provider default when unset.
    pub temperature: Option<f64>,
    /// Override for the provider's API base URL.
    pub base_url: Option<String>,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAi,
            model: "gpt-4o-mini".into(),
            max_tokens: 1024,
            temperature: None,
            base_url: None,
            timeout_secs: 120,
        }
    }
}
