// Rough estimate from votes alone.
//
// A stand-in number for when only the vote-correction data is at hand
// (for example a client that cannot reach the full analysis). It is not
// the trust score and the scorer never consults it.

/// Estimate a 0-100 score from the dislike percentage: `100 - 2 * pct`.
pub fn estimate_from_votes(likes: u64, dislikes: u64) -> u8 {
    let total = (likes + dislikes).max(1) as f64;
    let dislike_percent = dislikes as f64 / total * 100.0;
    (100.0 - dislike_percent * 2.0).round().clamp(0.0, 100.0) as u8
}
