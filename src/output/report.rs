// Plain-text summary suitable for pasting into a chat or an email.

use std::fmt::Write;

use super::percent;
use crate::models::Analysis;

/// Render the shareable summary of an analysis.
pub fn plain_text_summary(analysis: &Analysis) -> String {
    let video = &analysis.video;
    let result = &analysis.result;

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "TruthScore Analysis");
    let _ = writeln!(out, "-----------------------------------");
    let _ = writeln!(out, "Title: {}", video.title);
    let _ = writeln!(out, "Channel: {}", video.channel_title);
    let _ = writeln!(out, "TruthScore: {}% ({})", result.score, result.tier());
    let _ = writeln!(out, "Channel Trust: {}/100", result.channel_trust_score);
    let _ = writeln!(out, "Dislike Ratio: {}", percent(result.dislike_ratio, 1));
    let _ = writeln!(out);
    let _ = writeln!(out, "Flags:");
    for flag in &result.flags {
        let _ = writeln!(out, "- {}", flag.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::VideoId;
    use crate::models::{Flag, ScoreResult, Severity, VideoRecord};
    use chrono::Utc;

    #[test]
    fn test_summary_lists_flags_and_tier() {
        let mut video = VideoRecord::empty(VideoId::new("abcdefghijk").unwrap(), Utc::now());
        video.title = "A title".to_string();
        video.channel_title = "A channel".to_string();
        let result = ScoreResult {
            score: 80,
            flags: vec![Flag::new(Severity::Green, "Title looks reasonable", "")],
            engagement_ratio: 0.05,
            comment_ratio: 0.01,
            dislike_ratio: 0.125,
            channel_trust_score: 70,
        };
        let text = plain_text_summary(&Analysis { video, result });

        assert!(text.contains("TruthScore: 80% (Likely Legit)"));
        assert!(text.contains("Channel Trust: 70/100"));
        assert!(text.contains("Dislike Ratio: 12.5%"));
        assert!(text.ends_with("- Title looks reasonable\n"));
    }
}
