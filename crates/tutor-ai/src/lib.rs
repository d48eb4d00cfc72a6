//! AI engine for the tutor.
//!
//! Provides OpenAI and Claude chat clients plus the tutoring session:
//! - Typed multimodal messages (text and base64 image parts)
//! - Image encoding for uploads
//! - Hint-level session state and per-turn request assembly
//! - Token usage tracking

pub mod claude;
pub mod image;
pub mod message;
pub mod openai;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use claude::{ClaudeClient, ClaudeConfig};
pub use image::{read_image_file, Base64Encoder, EncodedImage, ImageEncoder};
pub use message::{ContentPart, HistoryEntry, Message, MessageContent, Role};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{HintLevel, InstructionStyle, TurnTemplate, TutorSession};
pub use token_tracker::TokenTracker;

/// A hosted chat-completion service.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send one ordered message list and wait for the text completion.
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;

    /// Model identifier, for logs and the status line.
    fn model_name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Not configured: {0}")]
    NotConfigured(String),
    #[error("Image encoding failed: {0}")]
    ImageEncoding(String),
    #[error("Nothing to send: enter a question or attach an image")]
    EmptyTurn,
}

impl AiError {
    /// Map a transport error, keeping timeouts distinct.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AiError::Timeout
        } else {
            AiError::NetworkError(err.to_string())
        }
    }
}

/// Keep error bodies short enough for a one-line display.
pub(crate) fn truncate_body(text: &str) -> String {
    text.chars().take(200).collect()
}
