use proptest::prelude::*;
use test_fixtures::answers_uniform;
use tizhi_constitution::{score_answers, ConstitutionEngine, QuestionRegistry};
use tizhi_core::config::ClassifyConfig;
use tizhi_core::constitution::Constitution;

fn arb_answers() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(1u8..=5, 30)
}

// ── P1: Determinism ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn classify_is_deterministic(answers in arb_answers()) {
        let engine = ConstitutionEngine::new();
        let first = engine.classify(&answers).unwrap();
        let second = engine.classify(&answers).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ── P2: Score range ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn scores_stay_in_range(answers in arb_answers()) {
        let engine = ConstitutionEngine::new();
        let scores = engine.score_only(&answers).unwrap();
        for (dimension, score) in scores.iter() {
            prop_assert!(
                (0.0..=100.0).contains(&score.value()),
                "{} out of range: {}",
                dimension,
                score
            );
        }
    }
}

// ── P3: Reverse-coding involution ─────────────────────────────────────────

proptest! {
    #[test]
    fn substituting_reversed_answers_and_toggling_flags_is_identity(
        answers in arb_answers()
    ) {
        let registry = QuestionRegistry::canonical();

        // Toggle every reverse-coded flag and substitute 6 − a on those items.
        let mut toggled_questions = registry.questions().to_vec();
        let mut substituted = answers.clone();
        for question in &mut toggled_questions {
            if question.reverse_coded {
                let i = usize::from(question.number - 1);
                substituted[i] = 6 - substituted[i];
                question.reverse_coded = false;
            }
        }
        let toggled = QuestionRegistry::from_questions(toggled_questions).unwrap();

        let original = score_answers(&registry, &answers);
        let rewritten = score_answers(&toggled, &substituted);
        prop_assert_eq!(original, rewritten);
    }
}

// ── P4: Monotonicity ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn raising_an_answer_raises_only_its_dimension(
        answers in arb_answers(),
        question in 2u8..=30,
    ) {
        // Question 1 is the only reverse-coded item; skip it.
        prop_assume!(answers[usize::from(question - 1)] < 5);

        let registry = QuestionRegistry::canonical();
        let target = registry.dimension_of(question);

        let mut raised = answers.clone();
        raised[usize::from(question - 1)] += 1;

        let before = score_answers(&registry, &answers);
        let after = score_answers(&registry, &raised);

        prop_assert!(
            after[target].value() > before[target].value(),
            "{} did not increase: {} -> {}",
            target,
            before[target],
            after[target]
        );
        for dimension in Constitution::ALL.into_iter().filter(|d| *d != target) {
            prop_assert_eq!(before[dimension], after[dimension], "{}", dimension);
        }
    }
}

// ── P5: Primary membership ────────────────────────────────────────────────

proptest! {
    #[test]
    fn primary_is_peace_or_biased(answers in arb_answers()) {
        let engine = ConstitutionEngine::new();
        let report = engine.classify(&answers).unwrap();

        if report.primary.is_peace() {
            return Ok(());
        }
        prop_assert!(
            report.scores[report.primary].value()
                >= engine.config().threshold_primary,
            "non-peace primary {} below threshold: {}",
            report.primary,
            report.scores[report.primary]
        );
    }
}

// ── P6: Peace exclusivity ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn balanced_verdict_matches_peace_qualification(answers in arb_answers()) {
        let engine = ConstitutionEngine::new();
        let config = engine.config().clone();
        let report = engine.classify(&answers).unwrap();

        let no_biased = Constitution::ALL
            .into_iter()
            .filter(|d| !d.is_peace())
            .all(|d| report.scores[d].value() < config.threshold_primary);
        let qualified = report.scores[Constitution::Peace].value()
            >= config.threshold_peace
            && no_biased;

        prop_assert_eq!(report.is_balanced, qualified);
        if report.is_balanced {
            prop_assert_eq!(report.primary, Constitution::Peace);
            prop_assert!(report.secondary.is_empty());
        }
    }
}

// ── P7: Tie-break determinism ─────────────────────────────────────────────

proptest! {
    #[test]
    fn primary_is_canonical_first_among_top_scores(answers in arb_answers()) {
        let engine = ConstitutionEngine::new();
        let report = engine.classify(&answers).unwrap();

        let biased: Vec<Constitution> = Constitution::ALL
            .into_iter()
            .filter(|d| {
                !d.is_peace()
                    && report.scores[*d].value() >= engine.config().threshold_primary
            })
            .collect();
        if biased.is_empty() {
            prop_assert_eq!(report.primary, Constitution::Peace);
            return Ok(());
        }

        let top = biased
            .iter()
            .map(|d| report.scores[*d].value())
            .fold(f64::NEG_INFINITY, f64::max);
        let canonical_first = biased
            .iter()
            .copied()
            .find(|d| report.scores[*d].value() == top)
            .unwrap();
        prop_assert_eq!(report.primary, canonical_first);
    }
}

#[test]
fn equal_top_scores_resolve_in_canonical_order() {
    let engine = ConstitutionEngine::new();

    // qi_deficiency (5–8) and yang_deficiency (9–12) both at raw 20.
    let mut answers = answers_uniform(1);
    for number in 5..=12u8 {
        answers[usize::from(number - 1)] = 5;
    }
    let report = engine.classify(&answers).unwrap();
    assert_eq!(report.primary, Constitution::QiDeficiency);
    assert_eq!(report.secondary, vec![Constitution::YangDeficiency]);

    // Same for a pair of three-question dimensions.
    let mut answers = answers_uniform(1);
    for number in 20..=25u8 {
        answers[usize::from(number - 1)] = 5;
    }
    let report = engine.classify(&answers).unwrap();
    assert_eq!(report.primary, Constitution::DampHeat);
    assert_eq!(report.secondary, vec![Constitution::BloodStasis]);
}

// ── P8: Extremes ──────────────────────────────────────────────────────────

#[test]
fn all_ones_zeroes_every_non_peace_dimension() {
    let engine = ConstitutionEngine::new();
    let report = engine.classify(&answers_uniform(1)).unwrap();

    for dimension in Constitution::ALL.into_iter().filter(|d| !d.is_peace()) {
        assert_eq!(report.scores[dimension].value(), 0.0, "{dimension}");
    }
    // Question 1 inverts, so peace raw is 8 of 20: score 25, not 100.
    assert_eq!(report.scores[Constitution::Peace].value(), 25.0);
}

#[test]
fn all_fives_saturates_every_non_peace_dimension() {
    let engine = ConstitutionEngine::new();
    let report = engine.classify(&answers_uniform(5)).unwrap();

    for dimension in Constitution::ALL.into_iter().filter(|d| !d.is_peace()) {
        assert_eq!(report.scores[dimension].value(), 100.0, "{dimension}");
    }
}

// ── Config validation holds under classification ──────────────────────────

proptest! {
    #[test]
    fn custom_valid_thresholds_never_panic(
        answers in arb_answers(),
        primary in 0.0f64..=100.0,
        peace in 0.0f64..=100.0,
    ) {
        let config = ClassifyConfig {
            threshold_primary: primary,
            threshold_secondary: primary / 2.0,
            threshold_peace: peace,
        };
        let engine = ConstitutionEngine::with_config(config).unwrap();
        let report = engine.classify(&answers).unwrap();
        prop_assert!(report.secondary.iter().all(|d| *d != report.primary));
    }
}
