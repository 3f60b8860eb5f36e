// YouTube Data API v3 client.
//
// Serves three of the four upstream roles: video metadata (primary),
// top-level comments, and channel statistics. All calls are simple keyed
// GETs against the public REST surface.
//
// API docs: https://developers.google.com/youtube/v3/docs

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::lenient_count;
use super::traits::{
    ChannelProvider, ChannelStats, CommentsProvider, VideoMetadata, VideoMetadataProvider,
};
use crate::identifier::VideoId;

/// Default Data API base URL.
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// The API never returns more than 100 comment threads per page.
pub const MAX_COMMENTS: u32 = 100;

/// Client for the YouTube Data API.
pub struct YouTubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    /// Create a client against `base_url` (pass a mock server URL in tests).
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(super::USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// GET `{base}/{resource}` with the API key appended and deserialize the body.
    async fn get<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);

        debug!(resource = resource, "YouTube API request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("YouTube {resource} request failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("YouTube {resource} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse YouTube {resource} response"))
    }
}

#[async_trait]
impl VideoMetadataProvider for YouTubeClient {
    async fn fetch_video(&self, id: &VideoId) -> Result<Option<VideoMetadata>> {
        let resp: ListResponse<VideoItem> = self
            .get(
                "videos",
                &[("part", "snippet,statistics,contentDetails"), ("id", id.as_str())],
            )
            .await?;

        let Some(item) = resp.items.into_iter().next() else {
            return Ok(None);
        };

        let snippet = item.snippet;
        let stats = item.statistics.unwrap_or_default();
        Ok(Some(VideoMetadata {
            title: snippet.title,
            description: snippet.description,
            view_count: stats.view_count,
            like_count: stats.like_count,
            comment_count: stats.comment_count,
            channel_id: snippet.channel_id,
            channel_title: snippet.channel_title,
            published_at: parse_timestamp(snippet.published_at.as_deref()),
            thumbnail_url: snippet.thumbnails.and_then(Thumbnails::best_url),
            duration: item.content_details.and_then(|d| d.duration),
        }))
    }
}

#[async_trait]
impl CommentsProvider for YouTubeClient {
    async fn fetch_comments(&self, id: &VideoId, limit: u32) -> Result<Vec<String>> {
        let limit = limit.clamp(1, MAX_COMMENTS).to_string();
        let resp: ListResponse<CommentThread> = self
            .get(
                "commentThreads",
                &[
                    ("part", "snippet"),
                    ("videoId", id.as_str()),
                    ("maxResults", &limit),
                    ("textFormat", "plainText"),
                ],
            )
            .await?;

        Ok(resp
            .items
            .into_iter()
            .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
            .collect())
    }
}

#[async_trait]
impl ChannelProvider for YouTubeClient {
    async fn fetch_channel(&self, channel_id: &str) -> Result<Option<ChannelStats>> {
        let resp: ListResponse<ChannelItem> = self
            .get("channels", &[("part", "snippet,statistics"), ("id", channel_id)])
            .await?;

        Ok(resp.items.into_iter().next().map(|item| {
            let stats = item.statistics.unwrap_or_default();
            ChannelStats {
                subscriber_count: stats.subscriber_count,
                video_count: stats.video_count,
                view_count: stats.view_count,
                created_at: item
                    .snippet
                    .and_then(|s| parse_timestamp(s.published_at.as_deref())),
            }
        }))
    }
}

/// Parse an RFC 3339 timestamp, discarding anything malformed.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

// -- Serde types for Data API list responses --

/// Every `*.list` endpoint wraps its results in `items`.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub snippet: VideoSnippet,
    pub statistics: Option<VideoStatistics>,
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: String,
    pub published_at: Option<String>,
    pub thumbnails: Option<Thumbnails>,
}

/// Counts are decimal strings; `likeCount` is absent when the uploader
/// hides it and `commentCount` when comments are disabled.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "lenient_count")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub comment_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

impl Thumbnails {
    /// Highest resolution available among the ones we care about.
    fn best_url(self) -> Option<String> {
        self.high
            .or(self.medium)
            .or(self.default)
            .map(|thumb| thumb.url)
    }
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub text_display: String,
}

#[derive(Debug, Deserialize)]
pub struct ChannelItem {
    pub snippet: Option<ChannelSnippet>,
    pub statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    pub published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, deserialize_with = "lenient_count")]
    pub subscriber_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub video_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub view_count: u64,
}
