//! Article quality analysis.
//!
//! Decomposes the quality report into independent pure functions — one
//! module per signal family — orchestrated by [`analyze`]. The pipeline
//! is deterministic, synchronous, and total: any string input yields a
//! well-formed report, and identical input yields an identical report.

pub mod lexical;
pub mod patterns;
pub mod reports;
pub mod score;
pub mod signals;
pub mod structure;
pub mod tips;

pub use reports::QualityReport;
pub use tips::TipInputs;

use crate::lexicon::Lexicon;
use crate::text;

/// Repeated phrases kept in the report.
const REPEATED_PHRASES_CAP: usize = 15;

/// Run the full analysis with the built-in Arabic lexicon.
pub fn quality_report(input: &str) -> QualityReport {
    analyze(input, Lexicon::builtin())
}

/// Run the full analysis with a caller-supplied lexicon.
///
/// Whitespace-only input short-circuits to an all-zero report with an
/// empty tips list.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn analyze(input: &str, lexicon: &Lexicon) -> QualityReport {
    let char_count = input.chars().count();
    if input.trim().is_empty() {
        return empty_report(char_count);
    }

    let paragraphs = text::split_paragraphs(input);
    let sentences = text::split_sentences(input);
    let tokens = text::extract_tokens(input);
    let word_count = tokens.len();

    let avg_sentence_length = structure::avg_sentence_length(&sentences);
    let paragraph_metrics = structure::paragraph_metrics(&paragraphs);
    let mut sentence_variety = structure::sentence_variety(&sentences);
    let headings = structure::analyze_headings(input);

    let sensory_ratio = lexical::sensory_ratio(&tokens, lexicon);
    let ttr = lexical::type_token_ratio(&tokens);
    let passive_ratio = lexical::passive_ratio(input, sentences.len());
    let sentiment = lexical::analyze_sentiment(&tokens, lexicon);
    let absolutes_count = lexical::count_absolutes(&tokens, lexicon);

    let boilerplate_flags = patterns::detect_boilerplate(input, lexicon);
    let repeated = patterns::detect_repeated_phrases(&tokens, lexicon);
    let fluff_density = patterns::fluff_density(
        boilerplate_flags.len(),
        absolutes_count,
        &repeated,
        word_count,
    );

    let eeat = signals::detect_eeat(input);
    let eeat_score = signals::eeat_score(&eeat);
    let info_gain_score = signals::info_gain_score(input);

    let human_style_score = score::human_style_score(
        sensory_ratio,
        ttr,
        info_gain_score,
        sentence_variety.start_hhi,
        passive_ratio,
        fluff_density,
        avg_sentence_length,
    );

    let tips = tips::build_tips(&TipInputs {
        sensory_ratio,
        ttr,
        passive_ratio,
        fluff_density,
        start_hhi: sentence_variety.start_hhi,
        avg_sentence_length,
        info_gain_score,
        eeat_score,
        absolutes_count,
        has_repeats: !repeated.is_empty(),
        has_boilerplate: !boilerplate_flags.is_empty(),
    });

    let mut repeated_phrases = repeated;
    repeated_phrases.truncate(REPEATED_PHRASES_CAP);
    sentence_variety.start_hhi = round3(sentence_variety.start_hhi);

    QualityReport {
        char_count,
        word_count,
        sentence_count: sentences.len(),
        paragraph_count: paragraphs.len(),
        avg_sentence_length: round2(avg_sentence_length),
        paragraph_metrics,
        sentence_variety,
        ttr: round3(ttr),
        sensory_ratio: round2(sensory_ratio),
        passive_ratio: round2(passive_ratio),
        boilerplate_flags,
        repeated_phrases,
        absolutes_count,
        sentiment,
        headings,
        eeat,
        eeat_score: round1(eeat_score),
        info_gain_score: round1(info_gain_score),
        fluff_density: round2(fluff_density),
        human_style_score: round1(human_style_score),
        tips,
    }
}

/// The all-zero report for degenerate (empty/whitespace) input.
fn empty_report(char_count: usize) -> QualityReport {
    QualityReport {
        char_count,
        word_count: 0,
        sentence_count: 0,
        paragraph_count: 0,
        avg_sentence_length: 0.0,
        paragraph_metrics: reports::ParagraphMetrics::default(),
        sentence_variety: reports::SentenceVariety::default(),
        ttr: 0.0,
        sensory_ratio: 0.0,
        passive_ratio: 0.0,
        boilerplate_flags: Vec::new(),
        repeated_phrases: Vec::new(),
        absolutes_count: 0,
        sentiment: reports::SentimentReport::default(),
        headings: reports::HeadingsReport::default(),
        eeat: reports::EeatSignals::default(),
        eeat_score: 0.0,
        info_gain_score: 0.0,
        fluff_density: 0.0,
        human_style_score: 0.0,
        tips: Vec::new(),
    }
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_zero_report() {
        for input in ["", "   ", " \n\t \n "] {
            let report = quality_report(input);
            assert_eq!(report.word_count, 0);
            assert_eq!(report.sentence_count, 0);
            assert_eq!(report.paragraph_count, 0);
            assert_eq!(report.ttr, 0.0);
            assert_eq!(report.sensory_ratio, 0.0);
            assert_eq!(report.passive_ratio, 0.0);
            assert_eq!(report.fluff_density, 0.0);
            assert_eq!(report.human_style_score, 0.0);
            assert!(report.tips.is_empty());
        }
    }

    #[test]
    fn score_stays_in_bounds_across_inputs() {
        let monotone = "كلمة ".repeat(2000);
        let long_word = "x".repeat(10_000);
        let inputs: [&str; 5] = [
            "نص قصير.",
            "دائمًا الأفضل دائمًا الأفضل دائمًا الأفضل دائمًا الأفضل دائمًا الأفضل",
            &monotone,
            "binary-ish \u{0}\u{1}\u{2} garbage 0101010",
            &long_word,
        ];
        for input in inputs {
            let report = quality_report(input);
            assert!(report.human_style_score >= 0.0);
            assert!(report.human_style_score <= 100.0);
            assert!(report.sensory_ratio >= 0.0);
            assert!(report.passive_ratio >= 0.0);
            assert!(report.fluff_density >= 0.0);
            assert!(report.eeat_score >= 0.0);
            assert!(report.info_gain_score >= 0.0);
        }
    }

    #[test]
    fn analysis_is_idempotent() {
        let text = "زرنا المطعم مساء الخميس. الأجواء هادئة والخدمة سريعة.\n\n\
                    نصيحة: اطلب المشاوي مبكرًا، فالقوام المقرمش يستحق الانتظار.";
        let a = serde_json::to_string(&quality_report(text)).unwrap();
        let b = serde_json::to_string(&quality_report(text)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sensory_phrase_strictly_increases_ratio() {
        let base = "الموقع قريب والأسعار معلنة والخدمة منظمة والموظفون متعاونون والحجز متاح \
                    والمواقف متوفرة والقائمة واضحة والطلب يصل بسرعة والمكان مرتب والإضاءة مناسبة \
                    والجلسات واسعة والتهوية جيدة والموسيقى منخفضة والممرات نظيفة والاستقبال منظم \
                    والدفع سهل والفواتير مفصلة والتغليف محكم والتوصيل متاح والتقييم مرتفع"
            .to_string();
        let before = quality_report(&base).sensory_ratio;
        let after =
            quality_report(&format!("{base} قوام مقرمش ورائحة زبدة محمّرة")).sensory_ratio;
        assert!(after > before);
    }

    #[test]
    fn repeated_bigram_is_reported_with_count() {
        let text = "طعم رائع أولا. طعم رائع ثانيا. طعم رائع ثالثا. طعم رائع رابعا. \
                    طعم رائع خامسا.";
        let report = quality_report(text);
        let hit = report
            .repeated_phrases
            .iter()
            .find(|p| p.phrase == "طعم رائع");
        assert!(hit.is_some_and(|p| p.count >= 3));
    }

    #[test]
    fn boilerplate_phrase_is_flagged_with_excerpt() {
        let text = "المكان يعتبر من أفضل الخيارات للعوائل في نهاية الأسبوع.";
        let report = quality_report(text);
        assert!(!report.boilerplate_flags.is_empty());
        assert!(
            report.boilerplate_flags[0]
                .excerpt
                .contains("يعتبر من أفضل الخيارات")
        );
    }

    #[test]
    fn generic_article_is_penalized_end_to_end() {
        // ~10 same-shape sentences, two boilerplate hits, a repeated
        // trigram, no sensory vocabulary, all active voice.
        let mut text = String::from(
            "المطعم يعتبر من أفضل الخيارات للعائلة. \
             المطعم يتميز بالجودة العالية كما يقول الجميع. ",
        );
        for _ in 0..4 {
            text.push_str("المطعم يستقبل الزوار كل مساء ويغلق متأخرا. ");
        }
        text.push_str("المطعم خيارات متنوعة للزوار الجدد ترضي خيارات متنوعة للزوار كل مرة.");

        let report = quality_report(&text);
        assert_eq!(report.sensory_ratio, 0.0);
        assert!(report.boilerplate_flags.len() >= 2);
        assert!(report.fluff_density > 0.0);
        assert!(report.human_style_score < 50.0);
        assert!(!report.tips.is_empty());
    }

    #[test]
    fn rounding_applied_to_report_fields() {
        let report = quality_report("جملة أولى قصيرة. جملة ثانية أطول قليلا من الأولى.");
        // 3dp / 2dp grids
        assert_eq!(report.ttr, round3(report.ttr));
        assert_eq!(report.sensory_ratio, round2(report.sensory_ratio));
        assert_eq!(report.human_style_score, round1(report.human_style_score));
    }
}
