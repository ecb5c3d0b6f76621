//! # tizhi-constitution
//!
//! The constitution scoring and classification core: a pure function pipeline
//! from a 30-item answer vector to a classification report.
//! Registry validates, scoring aggregates and converts, the classifier applies
//! the decision rules. No component holds state beyond the frozen registry.

pub mod classifier;
pub mod engine;
pub mod registry;
pub mod scoring;

pub use classifier::{classify_scores, Verdict};
pub use engine::ConstitutionEngine;
pub use registry::QuestionRegistry;
pub use scoring::score_answers;
