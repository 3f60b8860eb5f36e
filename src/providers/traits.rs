// Upstream provider traits, the seam between the aggregator and the data sources.
//
// The aggregator only sees these four traits. The YouTube Data API client
// implements three of them and the vote-correction client the fourth;
// tests substitute in-memory fakes.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::identifier::VideoId;

/// Core metadata for a video from the primary provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
}

/// Like/dislike counts from the vote-correction provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteCounts {
    pub likes: u64,
    pub dislikes: u64,
}

/// Channel statistics from the channel provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelStats {
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Primary metadata source. Its failure fails the whole analysis.
#[async_trait]
pub trait VideoMetadataProvider: Send + Sync {
    /// `Ok(None)` means the provider answered but knows no such video.
    async fn fetch_video(&self, id: &VideoId) -> Result<Option<VideoMetadata>>;
}

/// Source of dislike counts, which the primary provider does not expose.
#[async_trait]
pub trait VoteProvider: Send + Sync {
    async fn fetch_votes(&self, id: &VideoId) -> Result<VoteCounts>;
}

#[async_trait]
pub trait CommentsProvider: Send + Sync {
    /// Top-level comment text, at most `limit` entries.
    async fn fetch_comments(&self, id: &VideoId, limit: u32) -> Result<Vec<String>>;
}

#[async_trait]
pub trait ChannelProvider: Send + Sync {
    /// `Ok(None)` when the provider returned no item for the channel.
    async fn fetch_channel(&self, channel_id: &str) -> Result<Option<ChannelStats>>;
}
