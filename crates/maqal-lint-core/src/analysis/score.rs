//! Composite human-style scoring.

/// Baseline before adjustments.
const BASELINE: f64 = 50.0;
/// Average sentence length (words) above which the flat penalty applies.
const LONG_SENTENCE_AVG: f64 = 28.0;

/// Compute the composite human-style score, clamped to [0, 100].
///
/// The score is a sum of independently bounded contributions, not a
/// normalized formula; every cap below is load-bearing:
/// - sensory ratio: up to +20 (ratio / 2)
/// - lexical diversity: up to +20 (ttr × 40)
/// - information gain: up to +20 (score / 5)
/// - opening concentration: up to −40 ((hhi − 0.2) × 200)
/// - passive markers: up to −30
/// - fluff density: up to −30
/// - flat −10 when the average sentence runs past 28 words
pub fn human_style_score(
    sensory_ratio: f64,
    ttr: f64,
    info_gain_score: f64,
    start_hhi: f64,
    passive_ratio: f64,
    fluff_density: f64,
    avg_sentence_length: f64,
) -> f64 {
    let hhi_penalty = ((start_hhi - 0.2) * 200.0).clamp(0.0, 40.0);
    let passive_penalty = passive_ratio.clamp(0.0, 30.0);
    let fluff_penalty = fluff_density.clamp(0.0, 30.0);
    let long_sentence_penalty = if avg_sentence_length > LONG_SENTENCE_AVG {
        10.0
    } else {
        0.0
    };

    let score = BASELINE
        + (sensory_ratio / 2.0).clamp(0.0, 20.0)
        + (ttr * 40.0).clamp(0.0, 20.0)
        + (info_gain_score / 5.0).clamp(0.0, 20.0)
        - hhi_penalty
        - passive_penalty
        - fluff_penalty
        - long_sentence_penalty;

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_inputs_stay_near_baseline() {
        // No bonuses, no penalties.
        let score = human_style_score(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 15.0);
        assert_eq!(score, 50.0);
    }

    #[test]
    fn bonuses_cap_at_twenty_each() {
        let score = human_style_score(100.0, 1.0, 100.0, 0.0, 0.0, 0.0, 15.0);
        // 50 + 20 + 20 + 20
        assert_eq!(score, 100.0);
    }

    #[test]
    fn hhi_penalty_kicks_in_above_point_two() {
        let low = human_style_score(0.0, 0.5, 0.0, 0.2, 0.0, 0.0, 15.0);
        let high = human_style_score(0.0, 0.5, 0.0, 0.4, 0.0, 0.0, 15.0);
        assert_eq!(low - high, 40.0);
    }

    #[test]
    fn penalties_are_capped() {
        // Massive passive/fluff values saturate at 30 each, hhi at 40.
        let score = human_style_score(100.0, 1.0, 100.0, 1.0, 500.0, 500.0, 15.0);
        // 50 + 60 − 40 − 30 − 30 = 10
        assert_eq!(score, 10.0);
    }

    #[test]
    fn long_sentences_cost_ten_flat() {
        let normal = human_style_score(0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 28.0);
        let long = human_style_score(0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 28.1);
        assert_eq!(normal - long, 10.0);
    }

    #[test]
    fn score_never_leaves_bounds() {
        let floor = human_style_score(0.0, 0.0, 0.0, 1.0, 100.0, 100.0, 50.0);
        assert_eq!(floor, 0.0);
        let ceiling = human_style_score(1000.0, 10.0, 1000.0, 0.0, 0.0, 0.0, 10.0);
        assert_eq!(ceiling, 100.0);
    }
}
