/// Classification pipeline errors.
///
/// Every failure surface of the scoring core lives here; the classifier
/// itself is total on valid score vectors and never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("answer vector has {len} entries, expected {expected}")]
    InvalidAnswerShape { len: usize, expected: usize },

    #[error("answer {value} at question {index} is outside 1..=5")]
    InvalidAnswerValue { index: u8, value: u8 },

    #[error("invalid config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },

    #[error("question registry malformed: {reason}")]
    RegistryMalformed { reason: String },
}
