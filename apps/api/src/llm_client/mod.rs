/// LLM Client — the single point of entry for all Gemini API calls in the portal.
///
/// ARCHITECTURAL RULE: No other module may call the generative-language API directly.
/// Everything goes through the `TextGenerator` trait so callers can be tested
/// against an in-process fake.
///
/// Model: gemini-2.0-flash (hardcoded — do not make configurable to prevent drift)
use std::fmt;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The model used for all LLM calls in the portal.
pub const MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT_SECS: u64 = 120;
const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";
/// Markers used only for error objects that carry neither `code` nor `status`.
const BARE_RATE_LIMIT_MARKERS: &[&str] = &["Quota", "429"];

/// Gemini API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for empty or whitespace-only keys.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw.trim().to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Coarse classification used when presenting a failure to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    RateLimited,
    Generic,
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response did not contain candidate text")]
    MissingText,
}

impl LlmError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            LlmError::RateLimited { .. } => ServiceErrorKind::RateLimited,
            _ => ServiceErrorKind::Generic,
        }
    }

    /// The text shown to the user: the service's own message when it sent
    /// one, otherwise the error's display form.
    pub fn user_message(&self) -> String {
        match self {
            LlmError::RateLimited { message } | LlmError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, api_key: &ApiKey, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    code: Option<u16>,
    #[serde(default)]
    message: String,
    status: Option<String>,
}

impl GeminiErrorBody {
    /// Structured fields win. A bare `{message}` object falls back to the
    /// quota markers in the message. HTTP 429 is handled before this.
    fn is_rate_limit(&self) -> bool {
        if self.code.is_some() || self.status.is_some() {
            return self.code == Some(StatusCode::TOO_MANY_REQUESTS.as_u16())
                || self.status.as_deref() == Some(RESOURCE_EXHAUSTED);
        }
        BARE_RATE_LIMIT_MARKERS
            .iter()
            .any(|marker| self.message.contains(marker))
    }
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    fn into_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Gemini `generateContent` client. One request per call, no retries.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .context("Failed to build HTTP client")?,
            base_url: base_url.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{MODEL}:generateContent",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, api_key: &ApiKey, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key.expose())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!("Gemini responded with {} ({} bytes)", status, body.len());

        decode_generate_response(status, &body)
    }
}

/// Turns a raw `generateContent` response into the generated text.
///
/// Rate limiting is recognised from the HTTP status or from the error
/// object's `code`/`status` fields. The message wording is consulted only
/// when the error object has neither field.
pub fn decode_generate_response(status: StatusCode, body: &str) -> Result<String, LlmError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        let message = serde_json::from_str::<GenerateContentResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .map(|e| e.message)
            .unwrap_or_else(|| body.to_string());
        return Err(LlmError::RateLimited { message });
    }

    let parsed: GenerateContentResponse = serde_json::from_str(body)?;

    if let Some(error) = parsed.error {
        if error.is_rate_limit() {
            return Err(LlmError::RateLimited {
                message: error.message,
            });
        }
        return Err(LlmError::Api {
            status: error.code.unwrap_or(status.as_u16()),
            message: error.message,
        });
    }

    if !status.is_success() {
        return Err(LlmError::Api {
            status: status.as_u16(),
            message: format!("unexpected status {status}"),
        });
    }

    parsed.into_text().ok_or(LlmError::MissingText)
}
