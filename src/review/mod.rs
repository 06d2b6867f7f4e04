//! Review backends: send code to an LLM endpoint and collect a free-text
//! review.
//!
//! Two backends are supported:
//! - `ollama`: a locally running Ollama server
//! - `claude`: the Anthropic Messages API
//!
//! Each review is a single blocking HTTP request with a fixed timeout. On
//! timeout or connection failure the review yields an error string in the
//! result; there is no retry, backoff, or cancellation.

mod claude;
mod ollama;

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::prompt::render_template;

/// Built-in prompt template for the ollama backend.
const BASE_TEMPLATE: &str = include_str!("../templates/base_review.txt");

/// Built-in prompt template for the claude backend.
const CLAUDE_TEMPLATE: &str = include_str!("../templates/claude_review.txt");

/// Request timeout for a single review call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Errors from a review backend call.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("request timed out; the model may be overloaded")]
    Timeout,
    #[error("cannot connect to {0}; is the server running?")]
    Connection(String),
    #[error("invalid API key; check your credentials")]
    Auth,
    #[error("rate limited; wait and try again")]
    RateLimited,
    #[error("API key not set; use --api-key or the ANTHROPIC_API_KEY environment variable")]
    MissingApiKey,
    #[error("backend returned HTTP {0}")]
    Http(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Which LLM endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Ollama,
    Claude,
}

impl Backend {
    pub fn parse(s: &str) -> Option<Backend> {
        match s.to_ascii_lowercase().as_str() {
            "ollama" => Some(Backend::Ollama),
            "claude" => Some(Backend::Claude),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Ollama => "ollama",
            Backend::Claude => "claude",
        }
    }

    /// Default model when none is given on the command line.
    pub fn default_model(&self) -> &'static str {
        match self {
            Backend::Ollama => "deepseek-coder-v2:16b",
            Backend::Claude => "claude-sonnet-4-20250514",
        }
    }

    /// Built-in prompt template for this backend.
    pub fn default_template(&self) -> &'static str {
        match self {
            Backend::Ollama => BASE_TEMPLATE,
            Backend::Claude => CLAUDE_TEMPLATE,
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tuning knobs for a review call.
#[derive(Debug, Clone)]
pub struct ReviewOptions {
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Context window size (ollama only).
    pub ctx_size: u32,
    /// API key (claude only); falls back to ANTHROPIC_API_KEY.
    pub api_key: Option<String>,
}

/// The outcome of reviewing one file.
#[derive(Debug, Serialize)]
pub struct FileReview {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A configured review client.
///
/// Owns the HTTP client and the runtime that drives it; each call to
/// [`Reviewer::review_code`] is one blocking request.
pub struct Reviewer {
    http: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    backend: Backend,
    options: ReviewOptions,
}

impl Reviewer {
    pub fn new(backend: Backend, options: ReviewOptions) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("promptforge/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            http,
            runtime,
            backend,
            options,
        })
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Render the prompt template for one file and submit it for review.
    ///
    /// Always returns a string: backend failures are folded into an
    /// `ERROR: ...` message rather than propagated, so one file's failure
    /// never halts a multi-file run.
    pub fn review_code(
        &self,
        template: &str,
        filename: &str,
        language: &str,
        code: &str,
    ) -> String {
        let prompt = render_template(template, filename, language, code);

        let outcome = match self.backend {
            Backend::Ollama => self.runtime.block_on(ollama::generate(
                &self.http,
                &self.options,
                &prompt,
                REQUEST_TIMEOUT,
            )),
            Backend::Claude => self.runtime.block_on(claude::generate(
                &self.http,
                &self.options,
                &prompt,
                REQUEST_TIMEOUT,
            )),
        };

        match outcome {
            Ok(review) => review,
            Err(e) => format!("ERROR: {}", e),
        }
    }
}

/// Map a reqwest error onto the review error taxonomy.
fn classify_transport_error(err: reqwest::Error, endpoint: &str) -> ReviewError {
    if err.is_timeout() {
        ReviewError::Timeout
    } else if err.is_connect() {
        ReviewError::Connection(endpoint.to_string())
    } else {
        ReviewError::Network(err)
    }
}
