// TruthScore: explainable trust scoring for YouTube videos.
//
// This is the library root. Data flows one way:
//   identifier → pipeline::aggregate (upstream providers) → VideoRecord
//   → scoring (pure) → ScoreResult

pub mod config;
pub mod error;
pub mod identifier;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod providers;
pub mod scoring;

#[cfg(feature = "web")]
pub mod web;

pub use error::AnalysisError;
pub use identifier::{normalize_identifier, resolve_identifier, VideoId};
pub use models::{Analysis, Flag, ScoreResult, Severity, TrustTier, VideoRecord};
pub use pipeline::{Aggregator, Analyzer};
