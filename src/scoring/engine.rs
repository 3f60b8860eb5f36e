// Video trust score: six independent rule groups over one VideoRecord.
//
// Every group reads the record (plus the ratios derived once up front) and
// returns its own delta and flags. Groups never see each other's deltas, so
// the sum is order-independent; the fixed order only decides how flags of
// equal severity are listed. The running score starts at 50 and is clamped
// to 0-100 once, after all groups have run.

use tracing::debug;

use super::channel;
use super::signals;
use crate::models::{Flag, ScoreResult, Severity, VideoRecord};

const BASE_SCORE: i32 = 50;

const HIGH_VIEW_COUNT: u64 = 100_000;
const POPULAR_VIEW_COUNT: u64 = 10_000;
const VERY_LOW_ENGAGEMENT: f64 = 0.003;
const LOW_ENGAGEMENT: f64 = 0.01;
const HEALTHY_ENGAGEMENT: f64 = 0.03;

const HIGH_DISLIKE_RATIO: f64 = 0.30;
const NOTICEABLE_DISLIKE_RATIO: f64 = 0.15;

const MAX_HYPE_EMOJI: usize = 3;

/// Ratios computed once before any rule group runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratios {
    pub engagement: f64,
    pub comment: f64,
    pub dislike: f64,
}

impl Ratios {
    /// Views are floored at 1 so a zero-view record yields finite ratios.
    pub fn from_record(record: &VideoRecord) -> Self {
        let total_votes = record.like_count + record.dislike_count;
        let views = record.view_count.max(1) as f64;
        let dislike = if total_votes > 0 {
            record.dislike_count as f64 / total_votes as f64
        } else {
            0.0
        };
        Self {
            engagement: total_votes as f64 / views,
            comment: record.comment_count as f64 / views,
            dislike,
        }
    }
}

/// Delta and flags contributed by one rule group.
#[derive(Debug, Default)]
struct RuleOutcome {
    delta: i32,
    flags: Vec<Flag>,
}

impl RuleOutcome {
    fn add(&mut self, delta: i32, severity: Severity, message: impl Into<String>, impact: &str) {
        self.delta += delta;
        self.flags.push(Flag::new(severity, message, impact));
    }
}

/// Score a record. Pure and total: any record, including one with every
/// field at its default, produces a valid result.
pub fn score_video(record: &VideoRecord) -> ScoreResult {
    let ratios = Ratios::from_record(record);
    let trust = channel::assess(record);

    let outcomes = [
        text_risk(record),
        engagement(record, &ratios),
        dislikes(record, &ratios),
        comment_sentiment(record),
        monetization(record),
        channel_penalty(trust),
    ];

    let mut score = BASE_SCORE;
    let mut flags = Vec::new();
    for outcome in outcomes {
        score += outcome.delta;
        flags.extend(outcome.flags);
    }

    // Stable: equal severities keep rule-group order
    flags.sort_by_key(|flag| flag.severity.rank());

    let score = score.clamp(0, 100) as u8;

    debug!(
        video_id = %record.id,
        score,
        channel_trust = trust.score,
        flags = flags.len(),
        "Scored video"
    );

    ScoreResult {
        score,
        flags,
        engagement_ratio: ratios.engagement,
        comment_ratio: ratios.comment,
        dislike_ratio: ratios.dislike,
        channel_trust_score: trust.score,
    }
}

/// Group 1: scam, income, urgency and hype language in title/description.
fn text_risk(record: &VideoRecord) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    let title = record.title.to_lowercase();
    let description = record.description.to_lowercase();
    let both = [title.as_str(), description.as_str()];

    let scam = signals::contains_any(&both, signals::SCAM_KEYWORDS);
    let money = signals::has_money_claim(&[&record.title, &record.description]);
    let fast = signals::has_time_claim(&record.title);

    if scam && money && fast {
        out.add(
            -35,
            Severity::Red,
            "Unrealistic income + fast-result claims detected",
            "Common pattern for scams",
        );
    } else if scam && money {
        out.add(
            -25,
            Severity::Red,
            "High-risk income claims with scam keywords",
            "High chance of misleading content",
        );
    } else if scam {
        out.add(
            -15,
            Severity::Yellow,
            "Title contains known scam phrases",
            "Verify carefully",
        );
    } else {
        out.add(
            12,
            Severity::Green,
            "Title looks reasonable",
            "No blatant scam phrases found",
        );
    }

    if signals::contains_any(&both, signals::URGENCY_KEYWORDS) {
        out.add(
            -10,
            Severity::Yellow,
            "Urgency or FOMO language detected",
            "Often used in funnels",
        );
    }

    let emoji = signals::count_hype_emoji(&record.title);
    if emoji > MAX_HYPE_EMOJI {
        out.add(
            -6,
            Severity::Yellow,
            format!("Multiple hype emojis in title ({emoji})"),
            "Clickbait indicator",
        );
    }

    out
}

/// Group 2: votes relative to views, and disabled comments.
fn engagement(record: &VideoRecord, ratios: &Ratios) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    if record.view_count > HIGH_VIEW_COUNT && ratios.engagement < VERY_LOW_ENGAGEMENT {
        out.add(
            -20,
            Severity::Red,
            format!(
                "Very low engagement for high view count ({:.3}% interactions)",
                ratios.engagement * 100.0
            ),
            "Possible purchased views or bots",
        );
    } else if ratios.engagement < LOW_ENGAGEMENT {
        out.add(
            -10,
            Severity::Yellow,
            "Below-average engagement ratio",
            "Audience may not find value",
        );
    } else if ratios.engagement > HEALTHY_ENGAGEMENT {
        out.add(
            15,
            Severity::Green,
            "Healthy engagement ratio",
            "Indicates genuine audience",
        );
    }

    if record.comment_count == 0 && record.view_count > POPULAR_VIEW_COUNT {
        out.add(
            -15,
            Severity::Red,
            "Comments disabled on a popular video",
            "Often used to hide negative feedback",
        );
    }

    out
}

/// Group 3: share of dislikes among all votes. Skipped without dislikes.
fn dislikes(record: &VideoRecord, ratios: &Ratios) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    if record.dislike_count == 0 {
        return out;
    }

    let percent = ratios.dislike * 100.0;
    if ratios.dislike > HIGH_DISLIKE_RATIO {
        out.add(
            -20,
            Severity::Red,
            format!("High dislike ratio ({percent:.1}%)"),
            "Strong sign of controversial or poor quality content",
        );
    } else if ratios.dislike > NOTICEABLE_DISLIKE_RATIO {
        out.add(
            -10,
            Severity::Yellow,
            format!("Noticeable dislike ratio ({percent:.1}%)"),
            "Viewers are expressing dissatisfaction",
        );
    } else {
        out.add(
            0,
            Severity::Green,
            format!("Low dislike ratio ({percent:.1}%)"),
            "Most viewers who voted liked it",
        );
    }

    out
}

/// Group 4: negative vs positive vocabulary across the fetched comments.
fn comment_sentiment(record: &VideoRecord) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    let mut negative = 0usize;
    let mut positive = 0usize;
    let mut scam_mentions = 0usize;
    for comment in &record.comments {
        let lower = comment.to_lowercase();
        negative += signals::count_phrases(&lower, signals::NEGATIVE_TERMS);
        positive += signals::count_phrases(&lower, signals::POSITIVE_TERMS);
        if signals::contains_any(&[&lower], signals::SCAM_MENTION_TERMS) {
            scam_mentions += 1;
        }
    }

    // neg > pos * 1.5, kept in integers
    if negative * 2 > positive * 3 && negative > 3 {
        out.add(
            -20,
            Severity::Red,
            "Multiple negative comments mentioning scam/fake",
            "Viewer complaints present",
        );
    } else if negative > positive {
        out.add(
            -8,
            Severity::Yellow,
            "Some negative comments found",
            "Check comment examples",
        );
    } else if positive > negative {
        out.add(
            6,
            Severity::Green,
            "Comments skew positive",
            "Audience reports value",
        );
    }

    if scam_mentions > 1 {
        out.add(
            -20,
            Severity::Red,
            format!("{scam_mentions} comments explicitly mention \"scam\" or \"fake\""),
            "Strong red flag",
        );
    }

    out
}

/// Group 5: affiliate funnels and sponsorship disclosures.
fn monetization(record: &VideoRecord) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    let title = record.title.to_lowercase();
    let description = record.description.to_lowercase();

    if signals::has_affiliate_pitch(&description) {
        out.add(
            -18,
            Severity::Red,
            "Affiliate links / course pitch detected in description",
            "Often monetization-heavy funnels",
        );
    }

    if signals::contains_any(&[&title, &description], signals::SPONSOR_KEYWORDS) {
        out.add(
            -5,
            Severity::Blue,
            "Sponsored content detected",
            "Content may be biased towards the sponsor's product",
        );
    }

    out
}

/// Group 6: the main-score side of the channel assessment.
fn channel_penalty(trust: channel::ChannelTrust) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    if trust.sudden_viral {
        out.add(
            -15,
            Severity::Red,
            "Very new or small channel with sudden viral video",
            "Often used to promote affiliate funnels",
        );
    }
    out
}
