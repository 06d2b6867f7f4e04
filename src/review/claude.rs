//! Anthropic Messages API backend.
//!
//! Generates a review via: POST https://api.anthropic.com/v1/messages
//! The API key is forwarded from `--api-key` or ANTHROPIC_API_KEY; no
//! other authentication is performed.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{classify_transport_error, ReviewError, ReviewOptions};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Lower temperature keeps reviews focused.
const TEMPERATURE: f32 = 0.3;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Submit a rendered prompt to the Anthropic API.
pub(super) async fn generate(
    client: &Client,
    options: &ReviewOptions,
    prompt: &str,
    timeout: Duration,
) -> Result<String, ReviewError> {
    let api_key = options
        .api_key
        .clone()
        .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
        .ok_or(ReviewError::MissingApiKey)?;

    let payload = MessagesRequest {
        model: &options.model,
        max_tokens: options.max_tokens,
        temperature: TEMPERATURE,
        messages: vec![Message {
            role: "user",
            content: prompt,
        }],
    };

    let response = client
        .post(MESSAGES_URL)
        .header("x-api-key", api_key)
        .header("anthropic-version", API_VERSION)
        .json(&payload)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_transport_error(e, "the Anthropic API"))?;

    match response.status().as_u16() {
        200 => {}
        401 | 403 => return Err(ReviewError::Auth),
        429 => return Err(ReviewError::RateLimited),
        status => return Err(ReviewError::Http(status)),
    }

    let body: MessagesResponse = response
        .json()
        .await
        .map_err(|e| ReviewError::Malformed(e.to_string()))?;

    match body.content.first() {
        Some(block) if !block.text.is_empty() => Ok(block.text.clone()),
        _ => Err(ReviewError::Malformed("no response received".to_string())),
    }
}
