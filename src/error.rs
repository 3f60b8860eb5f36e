// Error taxonomy for a single analysis.
//
// Only the identifier and the primary metadata source can fail an
// analysis. The best-effort sources degrade to absent fields and never
// show up here.

use std::time::Duration;

use thiserror::Error;

use crate::identifier::VideoId;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input could not be turned into a video id. User-correctable.
    #[error("invalid video identifier: {0}")]
    InvalidIdentifier(String),

    /// The primary provider returned zero items: private, deleted or bogus id.
    #[error("video {0} not found (it may be private or deleted)")]
    NotFound(VideoId),

    /// The primary provider was unreachable or returned something unparseable.
    #[error("upstream metadata request failed: {0}")]
    Upstream(String),

    /// The primary provider did not answer within the configured timeout.
    #[error("{provider} did not respond within {timeout:?}")]
    Timeout {
        provider: &'static str,
        timeout: Duration,
    },
}

impl AnalysisError {
    /// Whether the caller should offer a retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::Timeout { .. })
    }

    /// HTTP status a transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidIdentifier(_) => 400,
            Self::NotFound(_) => 404,
            Self::Upstream(_) => 502,
            Self::Timeout { .. } => 504,
        }
    }
}
