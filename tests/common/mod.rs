// In-memory upstream providers for tests that exercise the aggregator
// without network access.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use truthscore::providers::traits::{
    ChannelProvider, ChannelStats, CommentsProvider, VideoMetadata, VideoMetadataProvider,
    VoteCounts, VoteProvider,
};
use truthscore::{Aggregator, VideoId};

/// How a fake source should answer.
#[derive(Clone)]
pub enum Reply<T> {
    Value(T),
    Fail(&'static str),
    /// Sleep this long before answering with the value.
    Hang(Duration, T),
}

impl<T: Clone + Send + Sync> Reply<T> {
    async fn resolve(&self) -> Result<T> {
        match self {
            Reply::Value(v) => Ok(v.clone()),
            Reply::Fail(msg) => anyhow::bail!("{msg}"),
            Reply::Hang(delay, v) => {
                tokio::time::sleep(*delay).await;
                Ok(v.clone())
            }
        }
    }
}

pub struct FakePrimary {
    pub reply: Reply<Option<VideoMetadata>>,
}

#[async_trait]
impl VideoMetadataProvider for FakePrimary {
    async fn fetch_video(&self, _id: &VideoId) -> Result<Option<VideoMetadata>> {
        self.reply.resolve().await
    }
}

pub struct FakeVotes {
    pub reply: Reply<VoteCounts>,
}

#[async_trait]
impl VoteProvider for FakeVotes {
    async fn fetch_votes(&self, _id: &VideoId) -> Result<VoteCounts> {
        self.reply.resolve().await
    }
}

pub struct FakeComments {
    pub reply: Reply<Vec<String>>,
}

#[async_trait]
impl CommentsProvider for FakeComments {
    async fn fetch_comments(&self, _id: &VideoId, limit: u32) -> Result<Vec<String>> {
        let mut comments = self.reply.resolve().await?;
        comments.truncate(limit as usize);
        Ok(comments)
    }
}

pub struct FakeChannel {
    pub reply: Reply<Option<ChannelStats>>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl ChannelProvider for FakeChannel {
    async fn fetch_channel(&self, _channel_id: &str) -> Result<Option<ChannelStats>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.resolve().await
    }
}

pub fn video_id() -> VideoId {
    VideoId::new("dQw4w9WgXcQ").expect("non-empty id")
}

pub fn metadata(title: &str, views: u64, likes: u64, comments: u64) -> VideoMetadata {
    VideoMetadata {
        title: title.to_string(),
        description: String::new(),
        view_count: views,
        like_count: likes,
        comment_count: comments,
        channel_id: "UCtest".to_string(),
        channel_title: "Test Channel".to_string(),
        published_at: None,
        thumbnail_url: Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string()),
        duration: Some("PT3M33S".to_string()),
    }
}

pub fn channel_created(created_at: DateTime<Utc>, subscribers: u64, videos: u64) -> ChannelStats {
    ChannelStats {
        subscriber_count: subscribers,
        video_count: videos,
        view_count: 0,
        created_at: Some(created_at),
    }
}

/// Bundle of fakes, kept so tests can inspect call counts afterwards.
pub struct Fakes {
    pub primary: Reply<Option<VideoMetadata>>,
    pub votes: Reply<VoteCounts>,
    pub comments: Reply<Vec<String>>,
    pub channel: Arc<FakeChannel>,
}

impl Fakes {
    pub fn new(
        primary: Reply<Option<VideoMetadata>>,
        votes: Reply<VoteCounts>,
        comments: Reply<Vec<String>>,
        channel: Reply<Option<ChannelStats>>,
    ) -> Self {
        Self {
            primary,
            votes,
            comments,
            channel: Arc::new(FakeChannel {
                reply: channel,
                calls: AtomicUsize::new(0),
            }),
        }
    }

    pub fn aggregator(&self, timeout: Duration) -> Aggregator {
        Aggregator::new(
            Arc::new(FakePrimary {
                reply: self.primary.clone(),
            }),
            Arc::new(FakeVotes {
                reply: self.votes.clone(),
            }),
            Arc::new(FakeComments {
                reply: self.comments.clone(),
            }),
            self.channel.clone(),
        )
        .with_timeout(timeout)
    }

    pub fn channel_calls(&self) -> usize {
        self.channel.calls.load(Ordering::SeqCst)
    }
}
