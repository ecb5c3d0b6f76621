use serde::{Deserialize, Serialize};

use crate::constitution::{Constitution, ScoreVector, TendencyMap};

/// The outcome of one classification call.
///
/// Immutable once produced. `secondary` is ordered by descending score with
/// canonical-order tie-break and never contains `primary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub scores: ScoreVector,
    pub primary: Constitution,
    pub secondary: Vec<Constitution>,
    pub tendencies: TendencyMap,
    pub is_balanced: bool,
}
