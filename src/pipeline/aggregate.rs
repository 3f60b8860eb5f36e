// Aggregation: one video id in, one merged VideoRecord out.
//
// 1. Fetch primary metadata (sequential, since the channel lookup needs its
//    channel id). Not-found and failures here abort the analysis.
// 2. Fan out votes, comments and channel lookups concurrently. Each is
//    wrapped in its own timeout and resolves to a value or `None`; one
//    failing never cancels or fails the others.
// 3. Merge, applying the documented defaults for whatever degraded.
//
// Nothing is retried. Callers may re-run the whole aggregation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AnalysisError;
use crate::identifier::VideoId;
use crate::models::VideoRecord;
use crate::providers::traits::{
    ChannelProvider, ChannelStats, CommentsProvider, VideoMetadata, VideoMetadataProvider,
    VoteCounts, VoteProvider,
};
use crate::providers::votes::VotesClient;
use crate::providers::youtube::{YouTubeClient, MAX_COMMENTS};

/// Default per-call upstream timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Merges the four upstream sources into a VideoRecord.
///
/// Holds no per-analysis state, so one instance can serve concurrent
/// analyses.
pub struct Aggregator {
    primary: Arc<dyn VideoMetadataProvider>,
    votes: Arc<dyn VoteProvider>,
    comments: Arc<dyn CommentsProvider>,
    channels: Arc<dyn ChannelProvider>,
    timeout: Duration,
    comment_limit: u32,
}

impl Aggregator {
    pub fn new(
        primary: Arc<dyn VideoMetadataProvider>,
        votes: Arc<dyn VoteProvider>,
        comments: Arc<dyn CommentsProvider>,
        channels: Arc<dyn ChannelProvider>,
    ) -> Self {
        Self {
            primary,
            votes,
            comments,
            channels,
            timeout: DEFAULT_TIMEOUT,
            comment_limit: MAX_COMMENTS,
        }
    }

    /// Wire up the production HTTP clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = config.timeout();
        let youtube = Arc::new(YouTubeClient::new(
            &config.youtube_api_url,
            &config.youtube_api_key,
            timeout,
        )?);
        let votes = Arc::new(VotesClient::new(&config.votes_api_url, timeout)?);

        Ok(Self::new(youtube.clone(), votes, youtube.clone(), youtube)
            .with_timeout(timeout)
            .with_comment_limit(config.comment_limit))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_comment_limit(mut self, limit: u32) -> Self {
        self.comment_limit = limit.min(MAX_COMMENTS);
        self
    }

    /// Build the merged record for `id`.
    pub async fn aggregate(&self, id: &VideoId) -> Result<VideoRecord, AnalysisError> {
        let metadata = match tokio::time::timeout(self.timeout, self.primary.fetch_video(id)).await
        {
            Ok(Ok(Some(metadata))) => metadata,
            Ok(Ok(None)) => return Err(AnalysisError::NotFound(id.clone())),
            Ok(Err(e)) => return Err(AnalysisError::Upstream(format!("{e:#}"))),
            Err(_) => {
                return Err(AnalysisError::Timeout {
                    provider: "video metadata",
                    timeout: self.timeout,
                })
            }
        };

        let channel_lookup = async {
            if metadata.channel_id.is_empty() {
                warn!(video_id = %id, "Primary metadata has no channel id, skipping channel lookup");
                return None;
            }
            self.best_effort("channel", id, self.channels.fetch_channel(&metadata.channel_id))
                .await
                .flatten()
        };

        // Settle all three, then inspect each independently
        let (votes, comments, channel) = futures::join!(
            self.best_effort("votes", id, self.votes.fetch_votes(id)),
            self.best_effort("comments", id, self.comments.fetch_comments(id, self.comment_limit)),
            channel_lookup,
        );

        info!(
            video_id = %id,
            degraded = ?degraded_sources(&votes, &comments, &channel),
            comments = comments.as_ref().map_or(0, Vec::len),
            "Aggregated video record"
        );

        let record = merge(id, metadata, votes, comments, channel);

        Ok(record)
    }

    /// Run one best-effort call under the timeout, degrading to `None`.
    async fn best_effort<T>(
        &self,
        source: &'static str,
        id: &VideoId,
        call: impl Future<Output = Result<T>>,
    ) -> Option<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(e)) => {
                warn!(source, video_id = %id, error = %format!("{e:#}"), "Upstream source unavailable");
                None
            }
            Err(_) => {
                warn!(
                    source,
                    video_id = %id,
                    timeout = ?self.timeout,
                    "Upstream source timed out"
                );
                None
            }
        }
    }
}

/// Names of the best-effort sources that came back empty-handed.
fn degraded_sources(
    votes: &Option<VoteCounts>,
    comments: &Option<Vec<String>>,
    channel: &Option<ChannelStats>,
) -> Vec<&'static str> {
    [
        ("votes", votes.is_none()),
        ("comments", comments.is_none()),
        ("channel", channel.is_none()),
    ]
    .into_iter()
    .filter_map(|(source, missing)| missing.then_some(source))
    .collect()
}

/// Combine primary metadata with whatever the best-effort sources returned.
fn merge(
    id: &VideoId,
    metadata: VideoMetadata,
    votes: Option<VoteCounts>,
    comments: Option<Vec<String>>,
    channel: Option<ChannelStats>,
) -> VideoRecord {
    // The vote API's like count wins unless it has none
    let like_count = votes
        .map(|v| v.likes)
        .filter(|likes| *likes > 0)
        .unwrap_or(metadata.like_count);
    let dislike_count = votes.map(|v| v.dislikes).unwrap_or(0);
    let channel = channel.unwrap_or_default();

    VideoRecord {
        id: id.clone(),
        title: metadata.title,
        description: metadata.description,
        view_count: metadata.view_count,
        like_count,
        dislike_count,
        comment_count: metadata.comment_count,
        channel_id: metadata.channel_id,
        channel_title: metadata.channel_title,
        channel_created_at: channel.created_at,
        channel_subscriber_count: channel.subscriber_count,
        channel_video_count: channel.video_count,
        channel_view_count: channel.view_count,
        comments: comments.unwrap_or_default(),
        thumbnail_url: metadata.thumbnail_url,
        published_at: metadata.published_at,
        duration: metadata.duration,
        observed_at: Utc::now(),
    }
}
