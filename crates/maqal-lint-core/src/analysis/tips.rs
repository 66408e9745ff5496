//! Threshold-gated improvement tips.
//!
//! Each tip is gated by one metric threshold; thresholds are independent
//! and checked in a fixed order so the emitted list is reproducible.

/// Raw (unrounded) metric values the tip generator gates on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TipInputs {
    /// Sensory token percentage.
    pub sensory_ratio: f64,
    /// Type-token ratio.
    pub ttr: f64,
    /// Passive markers per 100 sentences.
    pub passive_ratio: f64,
    /// Composite fluff measure.
    pub fluff_density: f64,
    /// Sentence-opening concentration index.
    pub start_hhi: f64,
    /// Mean tokens per sentence.
    pub avg_sentence_length: f64,
    /// Information-gain score.
    pub info_gain_score: f64,
    /// Authority score.
    pub eeat_score: f64,
    /// Overclaiming token count.
    pub absolutes_count: usize,
    /// Whether any n-gram repetition was flagged.
    pub has_repeats: bool,
    /// Whether any boilerplate template matched.
    pub has_boilerplate: bool,
}

/// Build the ordered tip list for a report.
pub fn build_tips(m: &TipInputs) -> Vec<String> {
    let mut tips = Vec::new();
    if m.sensory_ratio < 0.8 {
        tips.push("أضِف أوصافًا حسّية دقيقة لطبق أو اثنين (قوام/تحمير/حرارة) لرفع الحسّية.");
    }
    if m.ttr < 0.35 {
        tips.push("نوّع المفردات وتجنّب تكرار نفس الصفات.");
    }
    if m.passive_ratio > 12.0 {
        tips.push("خفّف صيغة المبني للمجهول؛ فضّل أفعالًا مباشرة (جرّبنا/لاحظنا).");
    }
    if m.fluff_density > 25.0 {
        tips.push("احذف العموميات وبدّلها بأمثلة محددة قابلة للتحقق.");
    }
    if m.start_hhi > 0.28 {
        tips.push("ابدأ الجمل بطرق مختلفة (حالات/زمن/جار ومجرور/شرط) لكسر الرتابة.");
    }
    if m.avg_sentence_length > 28.0 {
        tips.push("قسّم الجمل الطويلة (>28 كلمة) إلى جملتين واضحتيْن.");
    }
    if m.info_gain_score < 60.0 {
        tips.push("أضِف Pro Tip عمليًا أو مقارنة موجزة أو سلبية صغيرة متوازنة لرفع Information Gain.");
    }
    if m.eeat_score < 50.0 {
        tips.push("أبرز خبرة مباشرة أو منهجية تحرير مختصرة لتعزيز E-E-A-T.");
    }
    if m.absolutes_count > 0 {
        tips.push("خفّف من الكلمات المطلقة (مثل: دائمًا/الأفضل) واستبدلها بتوصيف قابل للنقاش.");
    }
    if m.has_repeats {
        tips.push("هناك عبارات متكررة؛ راجع أكثر N-grams تكرارًا وخفف تكرارها.");
    }
    if m.has_boilerplate {
        tips.push("توجد عبارات قالبية عامة؛ استبدلها بتفاصيل ملموسة من التجربة.");
    }
    tips.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> TipInputs {
        TipInputs {
            sensory_ratio: 2.0,
            ttr: 0.6,
            passive_ratio: 5.0,
            fluff_density: 10.0,
            start_hhi: 0.1,
            avg_sentence_length: 18.0,
            info_gain_score: 80.0,
            eeat_score: 75.0,
            absolutes_count: 0,
            has_repeats: false,
            has_boilerplate: false,
        }
    }

    #[test]
    fn healthy_metrics_emit_no_tips() {
        assert!(build_tips(&healthy()).is_empty());
    }

    #[test]
    fn each_threshold_fires_independently() {
        let mut m = healthy();
        m.passive_ratio = 13.0;
        let tips = build_tips(&m);
        assert_eq!(tips.len(), 1);
        assert!(tips[0].contains("المبني للمجهول"));
    }

    #[test]
    fn multiple_tips_keep_check_order() {
        let mut m = healthy();
        m.sensory_ratio = 0.0;
        m.absolutes_count = 3;
        m.has_boilerplate = true;
        let tips = build_tips(&m);
        assert_eq!(tips.len(), 3);
        assert!(tips[0].contains("حسّية"));
        assert!(tips[1].contains("المطلقة"));
        assert!(tips[2].contains("قالبية"));
    }

    #[test]
    fn boundary_values_do_not_fire() {
        let mut m = healthy();
        m.passive_ratio = 12.0;
        m.fluff_density = 25.0;
        m.start_hhi = 0.28;
        m.avg_sentence_length = 28.0;
        assert!(build_tips(&m).is_empty());
    }
}
