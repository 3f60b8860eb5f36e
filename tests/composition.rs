// Composition tests: identifier → aggregation → scoring → report, with
// in-memory providers standing in for the network.

mod common;

use std::time::Duration;

use chrono::Utc;

use common::{channel_created, metadata, video_id, Fakes, Reply};
use truthscore::output::report::plain_text_summary;
use truthscore::providers::traits::VoteCounts;
use truthscore::{AnalysisError, Analyzer, Severity, TrustTier};

const TIMEOUT: Duration = Duration::from_secs(5);

fn established_channel() -> Reply<Option<truthscore::providers::traits::ChannelStats>> {
    let created = Utc::now() - chrono::Duration::days(365 * 6 + 30);
    Reply::Value(Some(channel_created(created, 200_000, 400)))
}

fn honest_review() -> Fakes {
    let mut primary = metadata("My honest review of a budget laptop", 50_000, 2_900, 800);
    primary.description = "no affiliate links, just my thoughts".to_string();
    Fakes::new(
        Reply::Value(Some(primary)),
        Reply::Value(VoteCounts {
            likes: 3_000,
            dislikes: 50,
        }),
        Reply::Value(vec![
            "great video, thanks!".to_string(),
            "very helpful, learned a lot".to_string(),
        ]),
        established_channel(),
    )
}

#[tokio::test]
async fn url_in_analysis_out() {
    let fakes = honest_review();
    let analyzer = Analyzer::new(fakes.aggregator(TIMEOUT));

    let analysis = analyzer
        .analyze_input("https://youtu.be/dQw4w9WgXcQ?feature=share")
        .await
        .expect("analysis should succeed");

    assert_eq!(analysis.video.id, video_id());
    assert_eq!(analysis.video.like_count, 3_000);
    assert_eq!(analysis.result.score, 83);
    assert_eq!(analysis.result.channel_trust_score, 100);
    assert_eq!(analysis.result.tier(), TrustTier::LikelyLegit);
    assert_eq!(analysis.video.channel_age_whole_years(), Some(6));
}

#[tokio::test]
async fn degraded_sources_still_score() {
    let primary = metadata("Weekend hike vlog", 20_000, 900, 45);
    let fakes = Fakes::new(
        Reply::Value(Some(primary)),
        Reply::Fail("votes down"),
        Reply::Fail("comments disabled"),
        Reply::Fail("channel lookup failed"),
    );
    let analyzer = Analyzer::new(fakes.aggregator(TIMEOUT));

    let analysis = analyzer.analyze(&video_id()).await.unwrap();

    // +12 clean title, +15 engagement (900 / 20k = 0.045), no dislikes,
    // no comments, unknown channel
    assert_eq!(analysis.result.score, 77);
    assert_eq!(analysis.result.channel_trust_score, 30);
    assert_eq!(analysis.result.dislike_ratio, 0.0);
}

#[tokio::test]
async fn invalid_input_never_reaches_providers() {
    let fakes = honest_review();
    let analyzer = Analyzer::new(fakes.aggregator(TIMEOUT));

    let err = analyzer.analyze_input("not a url at all").await.unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidIdentifier(_)));
    assert_eq!(fakes.channel_calls(), 0);
}

#[tokio::test]
async fn not_found_propagates() {
    let fakes = Fakes::new(
        Reply::Value(None),
        Reply::Value(VoteCounts::default()),
        Reply::Value(Vec::new()),
        Reply::Value(None),
    );
    let analyzer = Analyzer::new(fakes.aggregator(TIMEOUT));

    let err = analyzer.analyze(&video_id()).await.unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound(_)));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn analysis_round_trips_through_json() {
    let fakes = honest_review();
    let analyzer = Analyzer::new(fakes.aggregator(TIMEOUT));
    let analysis = analyzer.analyze(&video_id()).await.unwrap();

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["video"]["id"], "dQw4w9WgXcQ");
    assert_eq!(json["result"]["score"], 83);
    assert_eq!(json["result"]["flags"][0]["severity"], "green");

    let back: truthscore::Analysis = serde_json::from_value(json).unwrap();
    assert_eq!(back.video, analysis.video);
    assert_eq!(back.result.flags, analysis.result.flags);
}

#[tokio::test]
async fn summary_lists_every_flag() {
    let mut primary = metadata("Passive income secrets", 300_000, 200, 0);
    primary.description = "Sponsored. Join my course: bit.ly/abc".to_string();
    let fakes = Fakes::new(
        Reply::Value(Some(primary)),
        Reply::Value(VoteCounts {
            likes: 200,
            dislikes: 400,
        }),
        Reply::Value(Vec::new()),
        Reply::Value(None),
    );
    let analyzer = Analyzer::new(fakes.aggregator(TIMEOUT));
    let analysis = analyzer.analyze(&video_id()).await.unwrap();

    assert!(analysis
        .result
        .flags
        .iter()
        .any(|f| f.severity == Severity::Blue));

    let summary = plain_text_summary(&analysis);
    for flag in &analysis.result.flags {
        assert!(summary.contains(&flag.message), "missing: {}", flag.message);
    }
}
