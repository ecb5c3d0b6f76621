//! ConstitutionEngine — the externally visible surface of the core.

use tizhi_core::config::ClassifyConfig;
use tizhi_core::constitution::ScoreVector;
use tizhi_core::errors::{ClassifyError, TizhiResult};
use tizhi_core::models::Report;
use tizhi_core::traits::IQuestionSource;

use crate::classifier;
use crate::registry::QuestionRegistry;
use crate::scoring;

/// Frozen registry plus thresholds. Every call is a pure function of its
/// inputs; instances may be shared across threads without coordination.
#[derive(Debug, Clone)]
pub struct ConstitutionEngine {
    registry: QuestionRegistry,
    config: ClassifyConfig,
}

impl ConstitutionEngine {
    /// Canonical registry, default thresholds.
    pub fn new() -> Self {
        Self {
            registry: QuestionRegistry::canonical(),
            config: ClassifyConfig::default(),
        }
    }

    /// Canonical registry with custom thresholds.
    pub fn with_config(config: ClassifyConfig) -> TizhiResult<Self> {
        config.validate()?;
        Ok(Self {
            registry: QuestionRegistry::canonical(),
            config,
        })
    }

    /// Build from an external question source. A malformed source fails here
    /// with `RegistryMalformed` and the engine never serves a request.
    pub fn from_source(
        source: &dyn IQuestionSource,
        config: ClassifyConfig,
    ) -> TizhiResult<Self> {
        config.validate()?;
        let registry = QuestionRegistry::from_source(source)?;
        Ok(Self { registry, config })
    }

    pub fn registry(&self) -> &QuestionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    /// Validate, score, and classify a 30-entry answer vector.
    pub fn classify(&self, answers: &[u8]) -> TizhiResult<Report> {
        let scores = self.score_only(answers)?;
        let verdict = classifier::classify_scores(&scores, &self.config);
        Ok(Report {
            scores,
            primary: verdict.primary,
            secondary: verdict.secondary,
            tendencies: verdict.tendencies,
            is_balanced: verdict.is_balanced,
        })
    }

    /// Validate and score without the classification verdict, for callers
    /// that only display raw scores.
    pub fn score_only(&self, answers: &[u8]) -> TizhiResult<ScoreVector> {
        self.registry.validate_answers(answers)?;
        let scores = scoring::score_answers(&self.registry, answers);
        // Non-finite scores cannot arise from validated input; seeing one
        // means the registry itself is unusable.
        if scores.values().any(|s| !s.value().is_finite()) {
            return Err(ClassifyError::RegistryMalformed {
                reason: "scoring produced a non-finite value".to_string(),
            }
            .into());
        }
        Ok(scores)
    }
}

impl Default for ConstitutionEngine {
    fn default() -> Self {
        Self::new()
    }
}
