use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::ApiKey;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_SIMULATED_DELAY_MS: u64 = 1000;

/// Application configuration loaded from environment variables.
///
/// `GEMINI_API_KEY` is optional: a missing key is reported to callers of
/// resume generation and does not stop the server from starting.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<ApiKey>,
    pub gemini_base_url: String,
    pub simulated_delay: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let delay_ms = match std::env::var("SIMULATED_DELAY_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("SIMULATED_DELAY_MS must be a whole number of milliseconds")?,
            Err(_) => DEFAULT_SIMULATED_DELAY_MS,
        };

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().and_then(ApiKey::new),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            simulated_delay: Duration::from_millis(delay_ms),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            simulated_delay: Duration::from_millis(DEFAULT_SIMULATED_DELAY_MS),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}
