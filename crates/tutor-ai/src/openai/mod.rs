//! OpenAI Chat Completions client.
//!
//! Implements the `AiClient` trait via `POST {base_url}/chat/completions`
//! with bearer-token auth from `OPENAI_API_KEY`. Image parts are sent as
//! `image_url` parts carrying a base64 `data:` URL.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
