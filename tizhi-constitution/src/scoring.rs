//! Raw aggregation and conversion to the 0–100 scale.
//!
//! ```text
//! converted = (raw − n) / (4 · n) · 100
//! ```
//!
//! where `raw` sums the dimension's answers after reverse-coding substitution
//! (`a ← 6 − a`) and `n` is the dimension's question count taken from the
//! registry, never hardcoded.

use tizhi_core::constants::QUESTION_COUNT;
use tizhi_core::constitution::{DimensionMap, Score, ScoreVector};

use crate::registry::QuestionRegistry;

/// Compute the nine-entry score vector for a validated answer vector.
///
/// Accumulation happens in integer space, question by question in ascending
/// order, with a single float conversion per dimension: identical raw sums
/// always produce bit-identical scores.
pub fn score_answers(registry: &QuestionRegistry, answers: &[u8]) -> ScoreVector {
    debug_assert_eq!(answers.len(), QUESTION_COUNT);

    let mut raw = [0u32; 9];
    for number in 1..=QUESTION_COUNT as u8 {
        let mut value = u32::from(answers[usize::from(number - 1)]);
        if registry.is_reverse(number) {
            value = 6 - value;
        }
        raw[registry.dimension_of(number).index()] += value;
    }

    DimensionMap::from_fn(|dimension| {
        let n = registry.question_count(dimension) as f64;
        let sum = f64::from(raw[dimension.index()]);
        // Clamp absorbs floating-point drift at the range edges.
        Score::new((sum - n) / (4.0 * n) * 100.0)
    })
}
