//! Ollama backend.
//!
//! Generates a review via: POST http://localhost:11434/api/generate

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{classify_transport_error, ReviewError, ReviewOptions};

const GENERATE_URL: &str = "http://localhost:11434/api/generate";

/// Lower temperature keeps reviews focused.
const TEMPERATURE: f32 = 0.3;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateParams,
}

#[derive(Serialize)]
struct GenerateParams {
    temperature: f32,
    /// Max tokens to generate.
    num_predict: u32,
    /// Context window size.
    num_ctx: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Submit a rendered prompt to the local Ollama server.
pub(super) async fn generate(
    client: &Client,
    options: &ReviewOptions,
    prompt: &str,
    timeout: Duration,
) -> Result<String, ReviewError> {
    let payload = GenerateRequest {
        model: &options.model,
        prompt,
        stream: false,
        options: GenerateParams {
            temperature: TEMPERATURE,
            num_predict: options.max_tokens,
            num_ctx: options.ctx_size,
        },
    };

    let response = client
        .post(GENERATE_URL)
        .json(&payload)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_transport_error(e, "Ollama"))?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(ReviewError::Http(status));
    }

    let body: GenerateResponse = response
        .json()
        .await
        .map_err(|e| ReviewError::Malformed(e.to_string()))?;

    if body.response.is_empty() {
        return Err(ReviewError::Malformed("no response received".to_string()));
    }

    Ok(body.response)
}
