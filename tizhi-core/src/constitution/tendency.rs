use serde::{Deserialize, Serialize};

/// Qualitative tendency label for one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tendency {
    /// Score below the secondary threshold.
    #[default]
    None,
    /// Score in the tendency band (secondary threshold up to primary).
    Tendency,
    /// Score at or above the primary threshold (peace uses its own rule).
    Marked,
}
