//! Anthropic Claude API client.
//!
//! Implements the `AiClient` trait for Claude models via the
//! Anthropic Messages API (https://api.anthropic.com/v1/messages).
//! System messages are lifted into the top-level `system` field and image
//! parts are sent as base64 `image` blocks.

mod api;
mod client;
mod config;

pub use client::ClaudeClient;
pub use config::ClaudeConfig;
