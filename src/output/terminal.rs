// Colored terminal output for a finished analysis.
//
// This module handles all terminal-specific formatting: colors and the
// flag list. The CLI delegates here.

use colored::Colorize;

use super::{percent, truncate_chars};
use crate::models::{Analysis, Severity, TrustTier};

/// Display one analysis in the terminal.
pub fn display_analysis(analysis: &Analysis) {
    let video = &analysis.video;
    let result = &analysis.result;

    println!(
        "\n{}",
        format!("=== {} ===", truncate_chars(&video.title, 70)).bold()
    );

    let age = video
        .channel_age_whole_years()
        .map(|years| format!("{years} years old"))
        .unwrap_or_else(|| "age unknown".to_string());
    println!("  {} • {}", video.channel_title, age.dimmed());
    println!(
        "  {} views • {} likes • {} dislikes • {} comments",
        video.view_count, video.like_count, video.dislike_count, video.comment_count
    );
    println!();

    let tier = result.tier();
    println!(
        "  TruthScore: {}  {}",
        colorize_tier(tier, &format!("{}%", result.score)),
        colorize_tier(tier, tier.label())
    );
    println!("  Channel trust: {}/100", result.channel_trust_score);
    println!(
        "  Engagement: {}  |  Comments/view: {}  |  Dislike ratio: {}",
        percent(result.engagement_ratio, 3),
        percent(result.comment_ratio, 3),
        percent(result.dislike_ratio, 1)
    );

    if result.flags.is_empty() {
        return;
    }

    println!("\n  {}", "Flags:".bold());
    for flag in &result.flags {
        println!(
            "    {} {}",
            severity_marker(flag.severity),
            flag.message
        );
        if !flag.impact.is_empty() {
            println!("      {}", flag.impact.dimmed());
        }
    }
    println!();
}

fn severity_marker(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Red => "●".red().bold(),
        Severity::Yellow => "●".yellow(),
        Severity::Blue => "●".blue(),
        Severity::Green => "●".green(),
    }
}

fn colorize_tier(tier: TrustTier, text: &str) -> colored::ColoredString {
    match tier {
        TrustTier::HighRisk => text.red().bold(),
        TrustTier::BeCareful => text.yellow(),
        TrustTier::LikelyLegit => text.green(),
    }
}
