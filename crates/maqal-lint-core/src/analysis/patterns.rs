//! Boilerplate template matching, repeated-phrase detection, and the
//! fluff-density composite.

use std::collections::HashMap;

use crate::lexicon::Lexicon;

use super::reports::{BoilerplateFlag, RepeatedPhrase};

/// Context characters kept on each side of a boilerplate match.
const EXCERPT_PAD: usize = 28;

/// Bigrams must repeat at least this often to be flagged.
const BIGRAM_MIN: usize = 3;
/// Trigrams must repeat at least this often to be flagged.
const TRIGRAM_MIN: usize = 2;
/// Flagged n-grams kept per n-gram size.
const PER_SIZE_CAP: usize = 30;

/// Match boilerplate templates against raw text.
///
/// Every match is recorded with a bounded excerpt for human review.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_boilerplate(text: &str, lexicon: &Lexicon) -> Vec<BoilerplateFlag> {
    let mut flags = Vec::new();
    for template in &lexicon.boilerplate {
        for m in template.regex().find_iter(text) {
            flags.push(BoilerplateFlag {
                pattern: template.raw.clone(),
                excerpt: excerpt(text, m.start(), m.end()),
            });
        }
    }
    flags
}

/// Extract the matched span padded by up to [`EXCERPT_PAD`] characters on
/// each side, with newlines flattened to spaces.
fn excerpt(text: &str, start: usize, end: usize) -> String {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(EXCERPT_PAD - 1)
        .map_or(0, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(EXCERPT_PAD)
        .map_or(text.len(), |(i, _)| end + i);
    text[from..to].replace('\n', " ")
}

/// Find over-repeated word n-grams after stopword removal.
///
/// Bigrams occurring ≥ 3 times and trigrams occurring ≥ 2 times are
/// flagged, capped at 30 per size, and sorted by descending count then
/// descending phrase length. The full list feeds [`fluff_density`]; the
/// report keeps only the top 15.
#[tracing::instrument(skip_all)]
pub fn detect_repeated_phrases(tokens: &[String], lexicon: &Lexicon) -> Vec<RepeatedPhrase> {
    let filtered: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !lexicon.stopwords.contains(*t))
        .collect();

    let mut flagged = Vec::new();
    for (n, min_count) in [(2, BIGRAM_MIN), (3, TRIGRAM_MIN)] {
        if filtered.len() < n {
            continue;
        }
        let mut counts: HashMap<String, usize> = HashMap::new();
        for window in filtered.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
        let mut ranked: Vec<(String, usize)> = counts
            .into_iter()
            .filter(|&(_, c)| c >= min_count)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(PER_SIZE_CAP);
        flagged.extend(
            ranked
                .into_iter()
                .map(|(phrase, count)| RepeatedPhrase { phrase, count }),
        );
    }

    flagged.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.phrase.chars().count().cmp(&a.phrase.chars().count()))
            .then_with(|| a.phrase.cmp(&b.phrase))
    });
    flagged
}

/// Composite fluff measure: boilerplate matches, overclaiming terms, and
/// excess phrase repetition, per 50 words of text.
///
/// Intentionally non-normalized; the `/ 50` scaling (integer division)
/// keeps scores comparable with historical thresholds.
pub fn fluff_density(
    boilerplate_count: usize,
    absolutes_count: usize,
    repeated: &[RepeatedPhrase],
    word_count: usize,
) -> f64 {
    let excess: usize = repeated
        .iter()
        .map(|p| p.count.saturating_sub(2))
        .sum();
    let units = boilerplate_count + absolutes_count + excess;
    100.0 * units as f64 / (word_count / 50).max(1) as f64
}
