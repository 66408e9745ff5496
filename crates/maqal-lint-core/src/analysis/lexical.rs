//! Lexicon-based classification: sensory density, lexical diversity,
//! passive-marker ratio, sentiment balance, and overclaiming terms.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::Lexicon;

use super::reports::{SentimentBalance, SentimentReport};

/// Regex for the Arabic auxiliary-passive construction "تم" followed by a
/// word ("تم تقديم", "تم تجهيز", ...). A cheap proxy for passive voice;
/// porting the engine to another language means substituting an
/// equivalent marker, not parsing grammar.
static PASSIVE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bتم\s+\w+").expect("valid regex"));

/// Percentage of tokens found in the sensory lexicon, 0.0 for empty input.
pub fn sensory_ratio(tokens: &[String], lexicon: &Lexicon) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let hits = tokens
        .iter()
        .filter(|t| lexicon.sensory.contains(t.as_str()))
        .count();
    100.0 * hits as f64 / tokens.len() as f64
}

/// Type-token ratio: distinct tokens over total tokens, 0.0 for empty input.
pub fn type_token_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    distinct.len() as f64 / tokens.len() as f64
}

/// Passive-marker occurrences per 100 sentences.
///
/// The denominator is floored at one sentence so the ratio is total.
#[tracing::instrument(skip_all)]
pub fn passive_ratio(text: &str, sentence_count: usize) -> f64 {
    let hits = PASSIVE_MARKER.find_iter(text).count();
    100.0 * hits as f64 / sentence_count.max(1) as f64
}

/// Count positive and negative lexicon hits and classify the balance.
///
/// A difference of at most 2 terms reads as neutral.
pub fn analyze_sentiment(tokens: &[String], lexicon: &Lexicon) -> SentimentReport {
    let positive = tokens
        .iter()
        .filter(|t| lexicon.positive.contains(t.as_str()))
        .count();
    let negative = tokens
        .iter()
        .filter(|t| lexicon.negative.contains(t.as_str()))
        .count();

    let balance = if positive.abs_diff(negative) <= 2 {
        SentimentBalance::Neutral
    } else if positive > negative {
        SentimentBalance::PositiveLeaning
    } else {
        SentimentBalance::CriticalLeaning
    };

    SentimentReport {
        positive,
        negative,
        balance,
    }
}

/// Count tokens in the absolute/overclaiming lexicon.
pub fn count_absolutes(tokens: &[String], lexicon: &Lexicon) -> usize {
    tokens
        .iter()
        .filter(|t| lexicon.absolutes.contains(t.as_str()))
        .count()
}
