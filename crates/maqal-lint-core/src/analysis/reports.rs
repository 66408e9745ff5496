//! Report structs for the article quality analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! report can be rendered by the CLI, exported as JSON, or validated by
//! downstream publishing tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full quality report for one article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QualityReport {
    /// Total characters in the input.
    pub char_count: usize,
    /// Total tokens (Arabic/Latin words and digit runs).
    pub word_count: usize,
    /// Total sentences.
    pub sentence_count: usize,
    /// Total paragraphs.
    pub paragraph_count: usize,
    /// Mean tokens per sentence.
    pub avg_sentence_length: f64,
    /// Paragraph length distribution.
    pub paragraph_metrics: ParagraphMetrics,
    /// Sentence-opening variety.
    pub sentence_variety: SentenceVariety,
    /// Type-token ratio (lexical diversity, 0–1).
    pub ttr: f64,
    /// Percentage of tokens matching the sensory lexicon.
    pub sensory_ratio: f64,
    /// Passive-marker occurrences per 100 sentences (heuristic).
    pub passive_ratio: f64,
    /// Boilerplate template matches with context excerpts.
    pub boilerplate_flags: Vec<BoilerplateFlag>,
    /// Over-repeated bigrams/trigrams (up to 15).
    pub repeated_phrases: Vec<RepeatedPhrase>,
    /// Tokens matching the absolute/overclaiming lexicon.
    pub absolutes_count: usize,
    /// Sentiment term counts and balance classification.
    pub sentiment: SentimentReport,
    /// Markdown-style heading structure.
    pub headings: HeadingsReport,
    /// Authority signal flags.
    pub eeat: EeatSignals,
    /// Authority score: 100 × (signals present) / 4.
    pub eeat_score: f64,
    /// Information-gain score: 100 × (indicators present, capped at 5) / 5.
    pub info_gain_score: f64,
    /// Composite fluff measure per 50 words (non-normalized).
    pub fluff_density: f64,
    /// Composite human-style score, clamped to [0, 100].
    pub human_style_score: f64,
    /// Ordered improvement suggestions.
    pub tips: Vec<String>,
}

// -- Structure --------------------------------------------------------------

/// Paragraph length distribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ParagraphMetrics {
    /// Mean paragraph length in words.
    pub avg_len: f64,
    /// Population standard deviation of paragraph lengths.
    pub std_len: f64,
    /// Percentage of paragraphs shorter than 20 words.
    pub pct_short_lt20w: f64,
    /// Percentage of paragraphs longer than 100 words.
    pub pct_long_gt100w: f64,
}

/// Sentence-opening variety.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SentenceVariety {
    /// The five most frequent sentence-opening tokens.
    pub start_top: Vec<StartCount>,
    /// Concentration index over the top-5 bucket (0–1, higher = more
    /// repetitive openings).
    pub start_hhi: f64,
}

/// A sentence-opening token with its frequency.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StartCount {
    /// The lowercased opening token.
    pub token: String,
    /// Number of sentences opening with it.
    pub count: usize,
}

/// Markdown-style heading structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HeadingsReport {
    /// Lines starting with `##`.
    pub h2_count: usize,
    /// Lines starting with `###`.
    pub h3_count: usize,
    /// Whether an FAQ section heading was detected.
    pub faq_section_present: bool,
}

// -- Patterns ---------------------------------------------------------------

/// A boilerplate template match.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BoilerplateFlag {
    /// The template that matched.
    pub pattern: String,
    /// The matched text with ~28 characters of context on each side.
    pub excerpt: String,
}

/// A phrase that repeats beyond its threshold.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RepeatedPhrase {
    /// The repeated bigram or trigram.
    pub phrase: String,
    /// Number of occurrences.
    pub count: usize,
}

// -- Sentiment --------------------------------------------------------------

/// Sentiment term counts and balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SentimentReport {
    /// Tokens matching the positive lexicon.
    pub positive: usize,
    /// Tokens matching the negative lexicon.
    pub negative: usize,
    /// Balance classification.
    pub balance: SentimentBalance,
}

/// Sentiment balance classification.
///
/// Neutral when positive and negative counts differ by at most 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SentimentBalance {
    /// |positive − negative| ≤ 2.
    #[default]
    Neutral,
    /// More positive than negative terms.
    PositiveLeaning,
    /// More negative than positive terms.
    CriticalLeaning,
}

// -- Authority signals ------------------------------------------------------

/// Binary authority (E-E-A-T) signals detected from marker keywords.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
pub struct EeatSignals {
    /// Firsthand experience markers (we visited, we tasted, ...).
    pub experience: bool,
    /// Domain expertise markers (technique, roasting, doneness, ...).
    pub expertise: bool,
    /// Authorial attribution markers (writer, editor, editorial team, ...).
    pub author: bool,
    /// Methodological transparency markers (disclosure, sources, ...).
    pub trust: bool,
}

impl EeatSignals {
    /// Number of signals present (0–4).
    pub const fn count(&self) -> usize {
        self.experience as usize
            + self.expertise as usize
            + self.author as usize
            + self.trust as usize
    }
}
