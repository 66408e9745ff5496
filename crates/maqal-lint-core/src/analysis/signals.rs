//! Authority (E-E-A-T) and information-gain signal detection.
//!
//! Both detectors are keyword-presence proxies over Arabic marker
//! vocabulary, not grammatical analysis. A port to another working
//! language needs a maintainer-supplied marker lexicon; these regexes do
//! not translate mechanically.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::reports::EeatSignals;

/// Firsthand-experience markers (we tried, we visited, we tasted, ...).
static EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(جرّبت|زرنا|تذوّقنا|زيارة|تجربت|من واقع الخبرة)\b").expect("valid regex")
});

/// Domain-expertise markers (technique, roasting, seasoning, doneness, ...).
static EXPERTISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(تقنية|تحميص|تتبيل|درجات التسوية|معيار|منهجية|قرينة)\b").expect("valid regex")
});

/// Authorial-attribution markers (writer, editor, editorial team, ...).
static AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(كاتب|محرر|فريق التحرير|توقيع|منهجية التحرير)\b").expect("valid regex")
});

/// Transparency markers (disclosure, source, methodology limits, ...).
static TRUST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(شفافية|مصدر|إفصاح|حدود المنهجية|اعتمدنا)\b").expect("valid regex")
});

/// Practical-tip markers.
static PRACTICAL_TIP: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"Pro Tip|نصيحة|تلميح|ملاحظة عملية")
        .case_insensitive(true)
        .build()
        .expect("valid regex")
});

/// Comparison markers (closest to, resembles, beats, less than, ...).
static COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"مقارنة|أقرب\s+إلى|يشبه|يفوق|أقل").expect("valid regex"));

/// Balanced minor-criticism markers.
static MINOR_CRITICISM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"سلبية\s+صغيرة|نقطة\s+لِلتحسين|يمكن\s+تحسين|ملاحظة\s+سلبية").expect("valid regex")
});

/// Geographic-specificity markers (north/south, corniche, mall, district, ...).
static GEOGRAPHY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(شمال|جنوب|شرق|غرب|كورنيش|مول|ممشى|حي)\s").expect("valid regex")
});

/// Prior-visit reference markers.
static PRIOR_VISIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"تجربة\s+.*(سابقة|أخرى)").expect("valid regex"));

/// Number of information-gain indicator categories.
const INFO_GAIN_CATEGORIES: usize = 5;

/// Detect the four binary authority signals.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn detect_eeat(text: &str) -> EeatSignals {
    EeatSignals {
        experience: EXPERIENCE.is_match(text),
        expertise: EXPERTISE.is_match(text),
        author: AUTHOR.is_match(text),
        trust: TRUST.is_match(text),
    }
}

/// Authority score: 100 × signals present / 4.
pub fn eeat_score(signals: &EeatSignals) -> f64 {
    100.0 * signals.count() as f64 / 4.0
}

/// Information-gain score: one point per indicator category present,
/// scaled to 0–100.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn info_gain_score(text: &str) -> f64 {
    let indicators = [
        &*PRACTICAL_TIP,
        &*COMPARISON,
        &*MINOR_CRITICISM,
        &*GEOGRAPHY,
        &*PRIOR_VISIT,
    ];
    let points = indicators.iter().filter(|re| re.is_match(text)).count();
    (100.0 * points.min(INFO_GAIN_CATEGORIES) as f64 / INFO_GAIN_CATEGORIES as f64)
        .clamp(0.0, 100.0)
}
