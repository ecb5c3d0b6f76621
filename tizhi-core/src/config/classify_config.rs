use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ClassifyError;

/// Classification thresholds, on the converted 0–100 score scale.
///
/// Thresholds are explicit inputs to `classify`; there is no process-wide
/// settings object. Must satisfy `0 ≤ secondary ≤ primary ≤ 100` and
/// `0 ≤ peace ≤ 100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Biased-dimension threshold for non-peace dimensions.
    pub threshold_primary: f64,
    /// Lower bound of the tendency band.
    pub threshold_secondary: f64,
    /// Peace qualification threshold.
    pub threshold_peace: f64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            threshold_primary: defaults::DEFAULT_THRESHOLD_PRIMARY,
            threshold_secondary: defaults::DEFAULT_THRESHOLD_SECONDARY,
            threshold_peace: defaults::DEFAULT_THRESHOLD_PEACE,
        }
    }
}

impl ClassifyConfig {
    /// Check threshold ranges and ordering.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        if !self.threshold_primary.is_finite() || !(0.0..=100.0).contains(&self.threshold_primary)
        {
            return Err(ClassifyError::InvalidConfig {
                field: "threshold_primary",
                value: self.threshold_primary,
            });
        }
        if !self.threshold_secondary.is_finite()
            || !(0.0..=100.0).contains(&self.threshold_secondary)
            || self.threshold_secondary > self.threshold_primary
        {
            return Err(ClassifyError::InvalidConfig {
                field: "threshold_secondary",
                value: self.threshold_secondary,
            });
        }
        if !self.threshold_peace.is_finite() || !(0.0..=100.0).contains(&self.threshold_peace) {
            return Err(ClassifyError::InvalidConfig {
                field: "threshold_peace",
                value: self.threshold_peace,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(ClassifyConfig::default().validate().is_ok());
    }

    #[test]
    fn secondary_above_primary_rejected() {
        let config = ClassifyConfig {
            threshold_primary: 40.0,
            threshold_secondary: 50.0,
            threshold_peace: 60.0,
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::InvalidConfig {
                field: "threshold_secondary",
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_rejected() {
        let config = ClassifyConfig {
            threshold_primary: 140.0,
            ..ClassifyConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ClassifyConfig {
            threshold_peace: -1.0,
            ..ClassifyConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
