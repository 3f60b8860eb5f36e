// Textual signals: the fixed vocabularies and patterns the rule groups
// test against.
//
// Phrases are matched against lower-cased text and must start a word, so
// "ad" does not fire inside "made" and "lie" does not fire inside
// "believe". They may end mid-word ("scam" counts in "scammers"), except
// for the short tokens in WHOLE_WORD_TERMS. The numeric-claim patterns
// are case-insensitive regexes.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Phrases associated with unverifiable-income claims.
pub const SCAM_KEYWORDS: &[&str] = &[
    "passive income",
    "no work",
    "autopilot",
    "guaranteed",
    "secret method",
    "get rich",
    "easy money",
    "make money fast",
    "overnight success",
    "zero effort",
    "no effort",
];

/// Urgency and scarcity language.
pub const URGENCY_KEYWORDS: &[&str] = &[
    "limited time",
    "act now",
    "hurry",
    "don't miss",
    "last chance",
    "expires soon",
    "only today",
];

/// Emoji that usually accompany money-hype titles.
pub const HYPE_EMOJI: &[char] = &[
    '💰', '🤑', '💸', '💵', '💴', '💶', '💷', '🔥', '⚡', '✨', '🚀', '💎',
];

pub const NEGATIVE_TERMS: &[&str] = &[
    "scam",
    "fake",
    "lie",
    "lying",
    "liar",
    "didn't work",
    "lost money",
    "waste",
    "clickbait",
    "bs",
    "bullshit",
    "refund",
    "disappointed",
    "misleading",
    "fraud",
    "ripoff",
    "don't buy",
    "not worth",
];

pub const POSITIVE_TERMS: &[&str] = &[
    "works",
    "worked",
    "helpful",
    "thank",
    "thanks",
    "great",
    "awesome",
    "legit",
    "legitimate",
    "real",
    "honest",
    "recommend",
    "valuable",
    "learned",
    "success",
];

/// Words that mark a comment as an explicit scam accusation.
pub const SCAM_MENTION_TERMS: &[&str] = &["scam", "fake", "fraud"];

/// Link shorteners and funnel vocabulary found in monetization-heavy
/// descriptions. "affiliat" is a stem: it covers affiliate, affiliates
/// and affiliated.
pub const AFFILIATE_KEYWORDS: &[&str] = &[
    "bit.ly",
    "bitly",
    "tinyurl",
    "clickbank",
    "digistore",
    "affiliat",
    "join now",
    "enroll now",
    "course",
    "coaching",
    "mentorship",
    "dm me on instagram",
    "link in bio",
    "join my course",
    "limited spots",
    "use code",
    "discount link",
    "free training",
];

pub const SPONSOR_KEYWORDS: &[&str] = &[
    "sponsored",
    "paid promotion",
    "ad",
    "advertisement",
    "partnered with",
    "thanks to our sponsor",
    "brand deal",
];

/// Currency per time unit, "$Nk" shorthand, and bare dollar amounts of
/// five or more digits/commas.
static MONEY_CLAIMS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)\$[\d,]+\s*(per|/)\s*(day|hour|week)").expect("valid money regex"),
        Regex::new(r"(?i)\$?(\d+)k\s*(per|in|/)").expect("valid money regex"),
        Regex::new(r"\$[\d,]{5,}").expect("valid money regex"),
    ]
});

static TIME_CLAIM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\s*(hour|day|minute|week)s?|overnight|instantly|immediately)")
        .expect("valid time regex")
});

/// Short tokens that are also common word fragments ("ad" in "advice",
/// "real" in "really"). These only match as whole words.
pub const WHOLE_WORD_TERMS: &[&str] = &["ad", "bs", "real"];

/// Words that cancel a following monetization term ("no affiliate links").
const NEGATIONS: &[&str] = &["no", "not", "without", "zero", "never"];

/// How many words before a match are checked for a negation.
const NEGATION_WINDOW: usize = 2;

const CLAUSE_BREAKS: &[char] = &['.', ',', ';', ':', '!', '?', '\n'];

/// Byte offsets where `phrase` occurs in `text` starting a word. Terms in
/// WHOLE_WORD_TERMS must also end one.
fn phrase_starts<'a>(text: &'a str, phrase: &'a str) -> impl Iterator<Item = usize> + 'a {
    let whole_word = WHOLE_WORD_TERMS.contains(&phrase);
    text.match_indices(phrase).filter_map(move |(start, matched)| {
        let end = start + matched.len();
        let starts_word = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let ends_word = text[end..].chars().next().map_or(true, |c| !c.is_alphanumeric());
        (starts_word && (ends_word || !whole_word)).then_some(start)
    })
}

/// Whether `phrase` occurs in `text`. Both arguments are expected
/// lower-case.
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    phrase_starts(text, phrase).next().is_some()
}

/// Like `contains_phrase`, but ignores occurrences preceded by a negation
/// within the last couple of words of the same clause.
pub fn contains_unnegated(text: &str, phrase: &str) -> bool {
    phrase_starts(text, phrase).any(|start| {
        let before = &text[..start];
        let clause = before
            .rfind(CLAUSE_BREAKS)
            .map_or(before, |at| &before[at + 1..]);
        !clause
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|word| !word.is_empty())
            .rev()
            .take(NEGATION_WINDOW)
            .any(|word| NEGATIONS.contains(&word))
    })
}

/// Whether any phrase in `phrases` occurs in any of `texts`.
pub fn contains_any(texts: &[&str], phrases: &[&str]) -> bool {
    phrases
        .iter()
        .any(|phrase| texts.iter().any(|text| contains_phrase(text, phrase)))
}

/// Number of phrases from `phrases` present in `text`. Each phrase counts
/// at most once per text.
pub fn count_phrases(text: &str, phrases: &[&str]) -> usize {
    phrases
        .iter()
        .filter(|phrase| contains_phrase(text, phrase))
        .count()
}

/// Whether the description pitches affiliate links, courses or other
/// funnels. Negated mentions ("no affiliate links") do not count.
pub fn has_affiliate_pitch(description: &str) -> bool {
    AFFILIATE_KEYWORDS
        .iter()
        .any(|keyword| contains_unnegated(description, keyword))
}

/// Whether any income-claim pattern matches any of `texts`.
pub fn has_money_claim(texts: &[&str]) -> bool {
    MONEY_CLAIMS
        .iter()
        .any(|pattern| texts.iter().any(|text| pattern.is_match(text)))
}

pub fn has_time_claim(text: &str) -> bool {
    TIME_CLAIM.is_match(text)
}

pub fn count_hype_emoji(text: &str) -> usize {
    text.chars().filter(|c| HYPE_EMOJI.contains(c)).count()
}
