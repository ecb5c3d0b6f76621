//! Decision rules over the converted score vector.
//!
//! Rule order: biased set → peace qualification → primary selection with
//! canonical-order tie-break → per-dimension tendency labels. Total on any
//! valid score vector; all failure surfaces live in the registry validator.

use tizhi_core::config::ClassifyConfig;
use tizhi_core::constitution::{Constitution, DimensionMap, ScoreVector, Tendency, TendencyMap};

/// Outcome of applying the decision rules. Combined with the score vector
/// into a full `Report` by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub primary: Constitution,
    pub secondary: Vec<Constitution>,
    pub tendencies: TendencyMap,
    pub is_balanced: bool,
}

/// Apply the decision rules to a score vector.
pub fn classify_scores(scores: &ScoreVector, config: &ClassifyConfig) -> Verdict {
    let peace_score = scores[Constitution::Peace].value();

    // Rule 1: the biased set, collected in canonical order.
    let biased: Vec<Constitution> = Constitution::ALL
        .into_iter()
        .filter(|d| !d.is_peace() && scores[*d].value() >= config.threshold_primary)
        .collect();

    // Rule 2: peace qualifies only with no biased dimension.
    let peace_qualified = peace_score >= config.threshold_peace && biased.is_empty();

    // Rules 3 and 4: primary selection and tie-break.
    let (primary, secondary, is_balanced) = if peace_qualified {
        (Constitution::Peace, Vec::new(), true)
    } else if !biased.is_empty() {
        // Strict comparison keeps the canonical-order winner on ties.
        let mut primary = biased[0];
        for &dimension in &biased[1..] {
            if scores[dimension].value() > scores[primary].value() {
                primary = dimension;
            }
        }
        let mut secondary: Vec<Constitution> =
            biased.iter().copied().filter(|d| *d != primary).collect();
        // Stable sort on canonically ordered input: descending score, ties in
        // canonical order.
        secondary.sort_by(|a, b| scores[*b].value().total_cmp(&scores[*a].value()));
        (primary, secondary, false)
    } else {
        // No biased dimension and peace not strong enough: default to peace
        // without the balanced verdict.
        (Constitution::Peace, Vec::new(), false)
    };

    // Rule 5: per-dimension tendency labels.
    let all_below_band = Constitution::ALL
        .into_iter()
        .filter(|d| !d.is_peace())
        .all(|d| scores[d].value() < config.threshold_secondary);
    let tendencies = DimensionMap::from_fn(|dimension| {
        if dimension.is_peace() {
            peace_tendency(peace_score, biased.is_empty(), all_below_band, config)
        } else {
            let score = scores[dimension].value();
            if score >= config.threshold_primary {
                Tendency::Marked
            } else if score >= config.threshold_secondary {
                Tendency::Tendency
            } else {
                Tendency::None
            }
        }
    });

    Verdict {
        primary,
        secondary,
        tendencies,
        is_balanced,
    }
}

/// Peace labeling: `Marked` requires every non-peace score below the tendency
/// band; `Tendency` tolerates scores inside the band as long as none is
/// biased.
fn peace_tendency(
    peace_score: f64,
    no_biased: bool,
    all_below_band: bool,
    config: &ClassifyConfig,
) -> Tendency {
    if peace_score < config.threshold_peace || !no_biased {
        return Tendency::None;
    }
    if all_below_band {
        Tendency::Marked
    } else {
        Tendency::Tendency
    }
}
