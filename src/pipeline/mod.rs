// Analysis pipeline: identifier → Aggregator → VideoRecord → scorer.
//
// Aggregation is the only async, fallible step. Scoring is a pure function
// of the record, so an Analysis is fully determined once the record exists.

pub mod aggregate;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::error::AnalysisError;
use crate::identifier::{self, VideoId};
use crate::models::Analysis;
use crate::scoring;

pub use aggregate::Aggregator;

/// Composes aggregation and scoring. Stateless across calls.
pub struct Analyzer {
    aggregator: Aggregator,
}

impl Analyzer {
    pub fn new(aggregator: Aggregator) -> Self {
        Self { aggregator }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Aggregator::from_config(config)?))
    }

    /// Aggregate and score one video.
    pub async fn analyze(&self, id: &VideoId) -> Result<Analysis, AnalysisError> {
        let video = self.aggregator.aggregate(id).await?;
        let result = scoring::score_video(&video);

        info!(
            video_id = %id,
            score = result.score,
            tier = result.tier().label(),
            channel_trust = result.channel_trust_score,
            flags = result.flags.len(),
            "Analysis complete"
        );

        Ok(Analysis { video, result })
    }

    /// Resolve raw user input (URL or id), then analyze it.
    pub async fn analyze_input(&self, raw: &str) -> Result<Analysis, AnalysisError> {
        let id = identifier::resolve_identifier(raw)?;
        self.analyze(&id).await
    }
}
