// Scoring: the deterministic rule engine.
//
// `engine` runs the rule groups and assembles the ScoreResult, `channel`
// computes the channel trust sub-score, `signals` holds the vocabularies
// and patterns. Nothing in here does I/O.

pub mod channel;
pub mod engine;
pub mod estimate;
pub mod signals;

pub use engine::score_video;
