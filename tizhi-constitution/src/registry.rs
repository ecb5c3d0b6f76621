//! The immutable question registry: question number → dimension mapping
//! plus answer-vector validation.

use tizhi_core::constants::{ANSWER_MAX, ANSWER_MIN, QUESTION_COUNT};
use tizhi_core::constitution::{Constitution, DimensionMap};
use tizhi_core::errors::ClassifyError;
use tizhi_core::models::Question;
use tizhi_core::traits::IQuestionSource;

/// The canonical questionnaire layout. Index 0 is question 1.
///
/// Question 1 is the positively worded peace item ("Are you energetic?") and
/// is the only reverse-coded entry in the simplified instrument.
const CANONICAL: [(Constitution, bool); QUESTION_COUNT] = [
    (Constitution::Peace, true),
    (Constitution::Peace, false),
    (Constitution::Peace, false),
    (Constitution::Peace, false),
    (Constitution::QiDeficiency, false),
    (Constitution::QiDeficiency, false),
    (Constitution::QiDeficiency, false),
    (Constitution::QiDeficiency, false),
    (Constitution::YangDeficiency, false),
    (Constitution::YangDeficiency, false),
    (Constitution::YangDeficiency, false),
    (Constitution::YangDeficiency, false),
    (Constitution::YinDeficiency, false),
    (Constitution::YinDeficiency, false),
    (Constitution::YinDeficiency, false),
    (Constitution::YinDeficiency, false),
    (Constitution::PhlegmDamp, false),
    (Constitution::PhlegmDamp, false),
    (Constitution::PhlegmDamp, false),
    (Constitution::DampHeat, false),
    (Constitution::DampHeat, false),
    (Constitution::DampHeat, false),
    (Constitution::BloodStasis, false),
    (Constitution::BloodStasis, false),
    (Constitution::BloodStasis, false),
    (Constitution::QiDepression, false),
    (Constitution::QiDepression, false),
    (Constitution::QiDepression, false),
    (Constitution::Special, false),
    (Constitution::Special, false),
];

/// Frozen mapping from question number to constitution dimension.
///
/// Built once at startup and passed by shared reference; pure data with no
/// dependence on configuration.
#[derive(Debug, Clone)]
pub struct QuestionRegistry {
    /// Sorted by question number; index 0 is question 1.
    questions: Vec<Question>,
    /// Question numbers per dimension, ascending.
    by_dimension: DimensionMap<Vec<u8>>,
}

impl QuestionRegistry {
    /// The canonical 30-question registry.
    pub fn canonical() -> Self {
        let questions = CANONICAL
            .iter()
            .enumerate()
            .map(|(i, &(dimension, reverse_coded))| {
                Question::new(i as u8 + 1, dimension, reverse_coded)
            })
            .collect();
        Self::index(questions)
    }

    /// Build a registry from an external question source, rejecting a
    /// malformed list with `RegistryMalformed`.
    pub fn from_source(source: &dyn IQuestionSource) -> Result<Self, ClassifyError> {
        let questions = source.questions()?;
        let registry = Self::from_questions(questions)?;
        tracing::debug!(questions = QUESTION_COUNT, "question registry built");
        Ok(registry)
    }

    /// Validate and build from a question list.
    ///
    /// The list must contain each number in 1..=30 exactly once, leave no
    /// dimension empty, and reverse-code peace items only.
    pub fn from_questions(mut questions: Vec<Question>) -> Result<Self, ClassifyError> {
        if questions.len() != QUESTION_COUNT {
            return Err(malformed(format!(
                "expected {} questions, got {}",
                QUESTION_COUNT,
                questions.len()
            )));
        }
        questions.sort_by_key(|q| q.number);
        for (i, question) in questions.iter().enumerate() {
            let expected = i as u8 + 1;
            if question.number != expected {
                return Err(malformed(format!(
                    "question numbers must cover 1..={} exactly once; found {} where {} was expected",
                    QUESTION_COUNT, question.number, expected
                )));
            }
            if question.reverse_coded && !question.dimension.is_peace() {
                return Err(malformed(format!(
                    "question {} is reverse-coded but assigned to {}",
                    question.number, question.dimension
                )));
            }
        }
        let registry = Self::index(questions);
        for dimension in Constitution::ALL {
            if registry.by_dimension[dimension].is_empty() {
                return Err(malformed(format!("dimension {dimension} has no questions")));
            }
        }
        Ok(registry)
    }

    fn index(questions: Vec<Question>) -> Self {
        let by_dimension = DimensionMap::from_fn(|dimension| {
            questions
                .iter()
                .filter(|q| q.dimension == dimension)
                .map(|q| q.number)
                .collect()
        });
        Self {
            questions,
            by_dimension,
        }
    }

    /// Check the shape and values of an answer vector.
    pub fn validate_answers(&self, answers: &[u8]) -> Result<(), ClassifyError> {
        if answers.len() != QUESTION_COUNT {
            return Err(ClassifyError::InvalidAnswerShape {
                len: answers.len(),
                expected: QUESTION_COUNT,
            });
        }
        for (i, &value) in answers.iter().enumerate() {
            if !(ANSWER_MIN..=ANSWER_MAX).contains(&value) {
                return Err(ClassifyError::InvalidAnswerValue {
                    index: i as u8 + 1,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Question numbers assigned to a dimension, ascending.
    pub fn questions_for(&self, dimension: Constitution) -> &[u8] {
        &self.by_dimension[dimension]
    }

    /// Number of questions contributing to a dimension.
    pub fn question_count(&self, dimension: Constitution) -> usize {
        self.by_dimension[dimension].len()
    }

    /// Whether a question's answer is inverted before summation.
    /// `number` is 1-based and must be in 1..=30.
    pub fn is_reverse(&self, number: u8) -> bool {
        self.questions[usize::from(number - 1)].reverse_coded
    }

    /// The dimension a question feeds. `number` is 1-based.
    pub fn dimension_of(&self, number: u8) -> Constitution {
        self.questions[usize::from(number - 1)].dimension
    }

    /// All questions, sorted by number.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

fn malformed(reason: String) -> ClassifyError {
    ClassifyError::RegistryMalformed { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_layout_matches_instrument() {
        let registry = QuestionRegistry::canonical();
        assert_eq!(registry.questions_for(Constitution::Peace), &[1, 2, 3, 4]);
        assert_eq!(
            registry.questions_for(Constitution::QiDeficiency),
            &[5, 6, 7, 8]
        );
        assert_eq!(registry.questions_for(Constitution::Special), &[29, 30]);
        assert!(registry.is_reverse(1));
        for number in 2..=30 {
            assert!(!registry.is_reverse(number), "question {number}");
        }
    }

    #[test]
    fn counts_come_from_the_registry() {
        let registry = QuestionRegistry::canonical();
        assert_eq!(registry.question_count(Constitution::Peace), 4);
        assert_eq!(registry.question_count(Constitution::PhlegmDamp), 3);
        assert_eq!(registry.question_count(Constitution::Special), 2);
    }

    #[test]
    fn rejects_wrong_length() {
        let questions: Vec<Question> = QuestionRegistry::canonical()
            .questions()
            .iter()
            .take(29)
            .copied()
            .collect();
        assert!(matches!(
            QuestionRegistry::from_questions(questions),
            Err(ClassifyError::RegistryMalformed { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_numbers() {
        let mut questions = QuestionRegistry::canonical().questions().to_vec();
        questions[5].number = 5;
        assert!(matches!(
            QuestionRegistry::from_questions(questions),
            Err(ClassifyError::RegistryMalformed { .. })
        ));
    }

    #[test]
    fn rejects_reverse_coding_outside_peace() {
        let mut questions = QuestionRegistry::canonical().questions().to_vec();
        questions[10].reverse_coded = true;
        assert!(matches!(
            QuestionRegistry::from_questions(questions),
            Err(ClassifyError::RegistryMalformed { .. })
        ));
    }

    #[test]
    fn rejects_empty_dimension() {
        let mut questions = QuestionRegistry::canonical().questions().to_vec();
        // Reassign both special questions elsewhere.
        questions[28].dimension = Constitution::QiDepression;
        questions[29].dimension = Constitution::QiDepression;
        assert!(matches!(
            QuestionRegistry::from_questions(questions),
            Err(ClassifyError::RegistryMalformed { .. })
        ));
    }

    #[test]
    fn validate_answers_reports_offending_entry() {
        let registry = QuestionRegistry::canonical();
        assert!(registry.validate_answers(&[3; 30]).is_ok());

        let err = registry.validate_answers(&[3; 29]).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::InvalidAnswerShape { len: 29, expected: 30 }
        ));

        let mut answers = [3u8; 30];
        answers[17] = 0;
        let err = registry.validate_answers(&answers).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::InvalidAnswerValue {
                index: 18,
                value: 0
            }
        ));

        answers[17] = 6;
        let err = registry.validate_answers(&answers).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::InvalidAnswerValue {
                index: 18,
                value: 6
            }
        ));
    }
}
