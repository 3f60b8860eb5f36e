use std::env;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;

use crate::providers::votes::DEFAULT_VOTES_API_URL;
use crate::providers::youtube::{DEFAULT_YOUTUBE_API_URL, MAX_COMMENTS};

const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// YouTube Data API key, required for any analysis.
    pub youtube_api_key: String,
    /// Data API base URL (override for testing).
    pub youtube_api_url: String,
    /// Vote-correction API base URL.
    pub votes_api_url: String,
    /// Per-upstream-call timeout in seconds.
    pub timeout_secs: u64,
    /// How many top-level comments to fetch (at most 100).
    pub comment_limit: u32,
    /// Port for `serve` (PORT env var).
    pub port: u16,
    /// Bind address for `serve` (TRUTHSCORE_BIND env var).
    pub bind: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the API key has a default. Numeric values that
    /// fail to parse fall back to their default with a warning.
    pub fn load() -> Result<Self> {
        Ok(Self {
            youtube_api_key: env::var("YOUTUBE_API_KEY").unwrap_or_default(),
            youtube_api_url: env::var("YOUTUBE_API_URL")
                .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_URL.to_string()),
            votes_api_url: env::var("VOTES_API_URL")
                .unwrap_or_else(|_| DEFAULT_VOTES_API_URL.to_string()),
            timeout_secs: parse_var("TRUTHSCORE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS).max(1),
            comment_limit: parse_var("TRUTHSCORE_COMMENT_LIMIT", MAX_COMMENTS).min(MAX_COMMENTS),
            port: parse_var("PORT", 3000),
            bind: env::var("TRUTHSCORE_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the YouTube API key is configured.
    /// Call this before any operation that talks to the Data API.
    pub fn require_youtube(&self) -> Result<()> {
        if self.youtube_api_key.is_empty() {
            anyhow::bail!(
                "YOUTUBE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}

/// Read and parse an env var, using `default` when unset or invalid.
fn parse_var<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(var = name, value = %raw, default = %default, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
