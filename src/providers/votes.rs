// Vote-correction client (Return YouTube Dislike).
//
// YouTube stopped exposing dislike counts; this community API estimates
// them and also reports a like count that is usually fresher than the one
// in the Data API statistics.
//
// API docs: https://returnyoutubedislike.com/docs

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::lenient_count;
use super::traits::{VoteCounts, VoteProvider};
use crate::identifier::VideoId;

pub const DEFAULT_VOTES_API_URL: &str = "https://returnyoutubedislikeapi.com";

pub struct VotesClient {
    client: reqwest::Client,
    base_url: String,
}

impl VotesClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(super::USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl VoteProvider for VotesClient {
    async fn fetch_votes(&self, id: &VideoId) -> Result<VoteCounts> {
        let url = format!("{}/votes", self.base_url);

        debug!(video_id = %id, "Vote API request");

        let response = self
            .client
            .get(&url)
            .query(&[("videoId", id.as_str())])
            .send()
            .await
            .context("Vote API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Vote API returned {status}: {body}");
        }

        let votes: VotesResponse = response
            .json()
            .await
            .context("Failed to parse vote API response")?;

        Ok(VoteCounts {
            likes: votes.likes,
            dislikes: votes.dislikes,
        })
    }
}

/// Response from `GET /votes`. Only the two counts matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct VotesResponse {
    #[serde(default, deserialize_with = "lenient_count")]
    pub likes: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub dislikes: u64,
}
