// Data models: the values that flow from the aggregator to the scorer
// and out to whoever displays the result.
//
// Both VideoRecord and ScoreResult are built fresh for every analysis and
// never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifier::VideoId;

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// Everything known about one video after merging all upstream sources.
///
/// Counts default to 0 when a source omitted them. Channel fields stay at
/// their defaults (and `channel_created_at` stays `None`) when the channel
/// lookup failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub view_count: u64,
    pub like_count: u64,
    pub dislike_count: u64,
    pub comment_count: u64,
    pub channel_id: String,
    pub channel_title: String,
    pub channel_created_at: Option<DateTime<Utc>>,
    pub channel_subscriber_count: u64,
    pub channel_video_count: u64,
    pub channel_view_count: u64,
    /// Top-level comment text, at most 100 entries.
    pub comments: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    /// ISO-8601 duration exactly as the provider reported it.
    pub duration: Option<String>,
    /// When the record was assembled. Ages are measured against this.
    pub observed_at: DateTime<Utc>,
}

impl VideoRecord {
    /// A record with every optional field empty and every count zero.
    pub fn empty(id: VideoId, observed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            view_count: 0,
            like_count: 0,
            dislike_count: 0,
            comment_count: 0,
            channel_id: String::new(),
            channel_title: String::new(),
            channel_created_at: None,
            channel_subscriber_count: 0,
            channel_video_count: 0,
            channel_view_count: 0,
            comments: Vec::new(),
            thumbnail_url: None,
            published_at: None,
            duration: None,
            observed_at,
        }
    }

    /// Channel age in fractional years, if the creation time is known.
    /// A creation time after `observed_at` counts as age zero.
    pub fn channel_age_years(&self) -> Option<f64> {
        self.channel_created_at.map(|created| {
            let seconds = (self.observed_at - created).num_seconds().max(0);
            seconds as f64 / SECONDS_PER_YEAR
        })
    }

    /// Channel age floored to whole years.
    pub fn channel_age_whole_years(&self) -> Option<u32> {
        self.channel_age_years().map(|years| years.floor() as u32)
    }
}

/// How serious a flag is. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Red,
    Yellow,
    Blue,
    Green,
}

impl Severity {
    /// Sort rank: red first, green last.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Red => 1,
            Severity::Yellow => 2,
            Severity::Blue => 3,
            Severity::Green => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Red => "red",
            Severity::Yellow => "yellow",
            Severity::Blue => "blue",
            Severity::Green => "green",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One explanatory finding attached to a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub severity: Severity,
    pub message: String,
    /// Why the finding matters, in a few words.
    pub impact: String,
}

impl Flag {
    pub fn new(severity: Severity, message: impl Into<String>, impact: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            impact: impact.into(),
        }
    }
}

/// The scorer's verdict for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0-100, higher is more trustworthy.
    pub score: u8,
    /// Sorted red → yellow → blue → green, stable within a severity.
    pub flags: Vec<Flag>,
    /// (likes + dislikes) / views
    pub engagement_ratio: f64,
    /// comments / views
    pub comment_ratio: f64,
    /// dislikes / (likes + dislikes), 0 when there are no votes
    pub dislike_ratio: f64,
    /// 0-100, independent of `score`.
    pub channel_trust_score: u8,
}

impl ScoreResult {
    pub fn tier(&self) -> TrustTier {
        TrustTier::from_score(self.score)
    }
}

/// Coarse verdict bands shown next to the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrustTier {
    HighRisk,
    BeCareful,
    LikelyLegit,
}

impl TrustTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 75 => TrustTier::LikelyLegit,
            s if s >= 45 => TrustTier::BeCareful,
            _ => TrustTier::HighRisk,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrustTier::HighRisk => "High Risk",
            TrustTier::BeCareful => "Be Careful",
            TrustTier::LikelyLegit => "Likely Legit",
        }
    }
}

impl std::fmt::Display for TrustTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A finished analysis: the merged record and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub video: VideoRecord,
    pub result: ScoreResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> VideoRecord {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        VideoRecord::empty(VideoId::new("dQw4w9WgXcQ").unwrap(), now)
    }

    #[test]
    fn test_channel_age_absent() {
        assert!(record().channel_age_years().is_none());
    }

    #[test]
    fn test_channel_age_whole_years_floors() {
        let mut r = record();
        r.channel_created_at = Some(r.observed_at - chrono::Duration::days(365 * 3 + 200));
        assert_eq!(r.channel_age_whole_years(), Some(3));
    }

    #[test]
    fn test_channel_created_in_future_is_age_zero() {
        let mut r = record();
        r.channel_created_at = Some(r.observed_at + chrono::Duration::days(10));
        assert_eq!(r.channel_age_years(), Some(0.0));
    }

    #[test]
    fn test_severity_order_matches_rank() {
        assert!(Severity::Red < Severity::Yellow);
        assert!(Severity::Blue < Severity::Green);
        assert_eq!(Severity::Yellow.rank(), 2);
    }
}
