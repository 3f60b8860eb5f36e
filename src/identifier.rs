// Video identifier extraction.
//
// Users paste whatever they have: a full watch URL, a youtu.be short link,
// an embed URL, or the bare 11-character id. Everything downstream works
// on the canonical id only.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Watch, short-link and embed URL forms. The id runs until the next
/// query/fragment delimiter.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
        .expect("URL pattern is a valid regex")
});

/// A bare id: exactly 11 characters from the URL-safe base64 alphabet.
static BARE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_-]{11})$").expect("bare id pattern is a valid regex")
});

/// Canonical video identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap a string that is already known to be an identifier.
    /// Returns `None` for empty input.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video id from a URL or bare id.
///
/// Tries, in order: the URL patterns, a strict bare-id match, then parsing
/// the input as a URL and reading its `v` query parameter. The first
/// non-empty match wins. Returns `None` when nothing matches.
///
/// Idempotent: a bare id normalizes to itself.
pub fn normalize_identifier(raw: &str) -> Option<VideoId> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(id) = URL_PATTERN
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .and_then(VideoId::new)
    {
        return Some(id);
    }

    if let Some(id) = BARE_ID
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| VideoId::new(m.as_str()))
    {
        return Some(id);
    }

    // Last resort: any URL that carries a `v` parameter, wherever it sits
    // in the query string (e.g. `watch?feature=share&v=...`).
    if !input.contains("://") {
        return None;
    }
    let url = Url::parse(input).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .and_then(|(_, value)| VideoId::new(value.into_owned()))
}

/// Resolve user input into an identifier for analysis.
///
/// Falls back to the trimmed input itself when it is a single token that
/// no pattern recognised, so ids of unusual length still reach the
/// provider (which reports not-found if they are bogus). Input with
/// whitespace or path separators is rejected.
pub fn resolve_identifier(raw: &str) -> Result<VideoId, AnalysisError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(AnalysisError::InvalidIdentifier(
            "paste a YouTube URL or video id".to_string(),
        ));
    }

    if let Some(id) = normalize_identifier(input) {
        return Ok(id);
    }

    let single_token = !input.chars().any(|c| c.is_whitespace() || c == '/');
    match VideoId::new(input) {
        Some(id) if single_token => Ok(id),
        _ => Err(AnalysisError::InvalidIdentifier(format!(
            "could not extract a video id from {input:?}"
        ))),
    }
}
