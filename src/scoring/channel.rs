// Channel trust sub-score.
//
// Rates the uploading channel on age, audience size and upload cadence,
// independently of the video-level score. Without a creation timestamp
// none of the bands can be evaluated and the sub-score is a flat 30.

use crate::models::VideoRecord;

const TRUST_BASE: i32 = 50;

/// Sub-score when the channel lookup failed or returned no creation time.
pub const TRUST_UNKNOWN_CHANNEL: u8 = 30;

/// Shortest age used as the divisor for videos-per-year.
const MIN_AGE_FOR_RATE: f64 = 0.1;

const NEW_CHANNEL_YEARS: f64 = 0.5;
const SMALL_CHANNEL_SUBSCRIBERS: u64 = 1_000;
const VIRAL_VIEW_COUNT: u64 = 10_000;

/// Outcome of the channel assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelTrust {
    pub score: u8,
    /// Brand-new, tiny channel with a video that took off, a common
    /// pattern for throwaway funnel channels.
    pub sudden_viral: bool,
}

/// Compute the channel trust sub-score for a record.
pub fn assess(record: &VideoRecord) -> ChannelTrust {
    let Some(age_years) = record.channel_age_years() else {
        return ChannelTrust {
            score: TRUST_UNKNOWN_CHANNEL,
            sudden_viral: false,
        };
    };

    let subscribers = record.channel_subscriber_count;
    let mut score = TRUST_BASE;

    // Age bands, checked in priority order
    if age_years > 5.0 {
        score += 20;
    } else if age_years > 2.0 {
        score += 10;
    } else if age_years < NEW_CHANNEL_YEARS {
        score -= 15;
    }

    if subscribers > 100_000 {
        score += 20;
    } else if subscribers > 10_000 {
        score += 10;
    } else if subscribers < SMALL_CHANNEL_SUBSCRIBERS {
        score -= 10;
    }

    let videos_per_year = record.channel_video_count as f64 / age_years.max(MIN_AGE_FOR_RATE);
    if videos_per_year > 50.0 {
        score += 10;
    } else if videos_per_year < 5.0 && age_years > 1.0 {
        score -= 5;
    }

    let sudden_viral = age_years < NEW_CHANNEL_YEARS
        && subscribers < SMALL_CHANNEL_SUBSCRIBERS
        && record.view_count > VIRAL_VIEW_COUNT;

    ChannelTrust {
        score: score.clamp(0, 100) as u8,
        sudden_viral,
    }
}
