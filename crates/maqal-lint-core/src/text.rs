//! Text segmentation.
//!
//! Provides paragraph splitting, sentence splitting, and token extraction
//! for mixed Arabic/Latin prose. All downstream analysis modules consume
//! these three views of the input.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for sentence terminators: runs of `.`, `!`, `?`, the Arabic
/// question mark `؟`, or newlines.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?؟\n]+").expect("valid regex"));

/// Regex for paragraph separators (one or more blank lines).
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Regex for tokens: maximal runs of Latin letters, Arabic letters
/// (U+0600–U+06FF), or digits.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9\u{0600}-\u{06FF}]+").expect("valid regex"));

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split text into sentences.
///
/// Sentences end at runs of terminal punctuation or at newlines. Arabic has
/// no capitalization cues, so splitting is purely punctuation-driven.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    SENTENCE_BREAK
        .split(text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract tokens from text, lowercasing Latin letters.
///
/// Arabic script has no case, so lowercasing only affects Latin tokens.
pub fn extract_tokens(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("هذا المطعم ممتاز. الخدمة سريعة!");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "هذا المطعم ممتاز");
    }

    #[test]
    fn arabic_question_mark_terminates() {
        let sentences = split_sentences("هل جربت الكبسة؟ أنصح بها");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn newline_terminates() {
        let sentences = split_sentences("سطر أول\nسطر ثانٍ");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn punctuation_runs_collapse() {
        let sentences = split_sentences("رائع!!! حقًا...");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n  ").is_empty());
        assert!(split_paragraphs("").is_empty());
        assert!(extract_tokens("").is_empty());
    }

    #[test]
    fn split_paragraphs_basic() {
        let text = "الفقرة الأولى.\n\nالفقرة الثانية.\n\nالثالثة.";
        let paras = split_paragraphs(text);
        assert_eq!(paras.len(), 3);
    }

    #[test]
    fn blank_line_with_spaces_still_splits() {
        let paras = split_paragraphs("فقرة\n   \nفقرة أخرى");
        assert_eq!(paras.len(), 2);
    }

    #[test]
    fn tokens_mixed_script() {
        let tokens = extract_tokens("جرّبنا Pro Tip رقم 1 في المطعم");
        assert!(tokens.contains(&"pro".to_string()));
        assert!(tokens.contains(&"tip".to_string()));
        assert!(tokens.contains(&"1".to_string()));
        assert!(tokens.contains(&"المطعم".to_string()));
    }

    #[test]
    fn tokens_skip_punctuation() {
        // Diacritics sit inside U+0600–U+06FF, so "جدًا" stays one token.
        let tokens = extract_tokens("لذيذ، ممتاز — (جدًا)");
        assert_eq!(tokens, vec!["لذيذ", "ممتاز", "جدًا"]);
    }

    #[test]
    fn non_linguistic_garbage_is_safe() {
        let tokens = extract_tokens("@@@ ### $$$ \u{0}\u{1}");
        assert!(tokens.is_empty());
    }
}
