//! Structural statistics: paragraph distribution, sentence-opening
//! variety, and heading structure.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::text;

use super::reports::{HeadingsReport, ParagraphMetrics, SentenceVariety, StartCount};
use super::round1;

/// Regex for `##` heading lines.
static H2_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*##\s+").expect("valid regex"));

/// Regex for `###` heading lines.
static H3_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*###\s+").expect("valid regex"));

/// Regex for an FAQ section heading (Arabic or literal "FAQ").
static FAQ_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*##\s*أسئلة\s+شائعة|FAQ").expect("valid regex"));

/// Mean tokens per sentence, 0.0 when there are no sentences.
pub fn avg_sentence_length(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences.iter().map(|s| text::extract_tokens(s).len()).sum();
    total as f64 / sentences.len() as f64
}

/// Paragraph length distribution: mean, population standard deviation,
/// and the share of very-short (<20 words) and very-long (>100 words)
/// paragraphs.
#[tracing::instrument(skip_all)]
pub fn paragraph_metrics(paragraphs: &[String]) -> ParagraphMetrics {
    if paragraphs.is_empty() {
        return ParagraphMetrics::default();
    }

    let lengths: Vec<usize> = paragraphs
        .iter()
        .map(|p| text::extract_tokens(p).len())
        .collect();
    let count = lengths.len() as f64;
    let avg = lengths.iter().sum::<usize>() as f64 / count;
    let variance = lengths
        .iter()
        .map(|&l| (l as f64 - avg).powi(2))
        .sum::<f64>()
        / count;

    let short = lengths.iter().filter(|&&l| l < 20).count();
    let long = lengths.iter().filter(|&&l| l > 100).count();

    ParagraphMetrics {
        avg_len: round1(avg),
        std_len: round1(variance.sqrt()),
        pct_short_lt20w: round1(100.0 * short as f64 / count),
        pct_long_gt100w: round1(100.0 * long as f64 / count),
    }
}

/// Sentence-opening variety: the five most frequent opening tokens and a
/// concentration index over that top-5 bucket.
///
/// The index is a sum of squared frequency shares restricted to the top
/// five openings, with the share denominator being the total number of
/// sentence starts. The truncation to five is deliberate and must be kept
/// for score comparability.
///
/// Returns the raw (unrounded) index; the orchestrator rounds the
/// reported field.
#[tracing::instrument(skip_all)]
pub fn sentence_variety(sentences: &[String]) -> SentenceVariety {
    let starts: Vec<String> = sentences
        .iter()
        .filter_map(|s| text::extract_tokens(s).into_iter().next())
        .collect();
    if starts.is_empty() {
        return SentenceVariety::default();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for start in &starts {
        *counts.entry(start.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // Count descending, then lexicographic, so ties are deterministic.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(5);

    let total = starts.len() as f64;
    let start_hhi = ranked
        .iter()
        .map(|&(_, c)| (c as f64 / total).powi(2))
        .sum();

    SentenceVariety {
        start_top: ranked
            .into_iter()
            .map(|(token, count)| StartCount {
                token: token.to_string(),
                count,
            })
            .collect(),
        start_hhi,
    }
}

/// Count markdown-style headings and detect an FAQ section.
pub fn analyze_headings(text: &str) -> HeadingsReport {
    HeadingsReport {
        h2_count: H2_LINE.find_iter(text).count(),
        h3_count: H3_LINE.find_iter(text).count(),
        faq_section_present: FAQ_HEADING.is_match(text),
    }
}
