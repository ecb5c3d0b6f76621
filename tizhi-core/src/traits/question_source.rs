use crate::errors::ClassifyError;
use crate::models::Question;

/// Supplies the questionnaire registry at initialization.
///
/// Consumed exactly once when building the registry; a malformed list is
/// rejected with `RegistryMalformed` and the engine refuses to serve.
pub trait IQuestionSource: Send + Sync {
    /// Return the full question list, one entry per question number.
    fn questions(&self) -> Result<Vec<Question>, ClassifyError>;
}
