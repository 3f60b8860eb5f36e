// Upstream data providers: trait definitions plus the HTTP clients.
//
// Each submodule wraps one external API. Response shapes are deserialized
// leniently: YouTube reports counts as decimal strings, the vote API as
// numbers, and either may omit a field entirely.

pub mod traits;
pub mod votes;
pub mod youtube;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// User agent sent to every upstream API.
pub const USER_AGENT: &str = "truthscore/0.1 (video-trust-analysis)";

/// Deserialize a count given as a number, a numeric string, or null.
/// Anything unparseable becomes 0.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(serde_json::Number),
        Text(String),
        Other(IgnoredAny),
    }

    let count = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Raw::Text(s) => s.trim().parse::<u64>().unwrap_or(0),
        Raw::Other(IgnoredAny) => 0,
    };
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Counted {
        #[serde(default, deserialize_with = "lenient_count")]
        n: u64,
    }

    fn parse(json: &str) -> u64 {
        serde_json::from_str::<Counted>(json).unwrap().n
    }

    #[test]
    fn test_lenient_count_shapes() {
        assert_eq!(parse(r#"{"n": 42}"#), 42);
        assert_eq!(parse(r#"{"n": "1234"}"#), 1234);
        assert_eq!(parse(r#"{"n": null}"#), 0);
        assert_eq!(parse(r#"{"n": "n/a"}"#), 0);
        assert_eq!(parse(r#"{"n": -3}"#), 0);
        assert_eq!(parse(r#"{}"#), 0);
    }

    #[test]
    fn test_lenient_count_ignores_structured_values() {
        assert_eq!(parse(r#"{"n": {"value": 12}}"#), 0);
        assert_eq!(parse(r#"{"n": [1, 2]}"#), 0);
        assert_eq!(parse(r#"{"n": true}"#), 0);
    }
}
