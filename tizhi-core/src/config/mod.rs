pub mod catalog_config;
pub mod classify_config;
pub mod defaults;

pub use catalog_config::CatalogConfig;
pub use classify_config::ClassifyConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TizhiError, TizhiResult};

/// Top-level backend configuration, loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TizhiConfig {
    pub classify: ClassifyConfig,
    pub catalog: CatalogConfig,
}

impl TizhiConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(raw: &str) -> TizhiResult<Self> {
        let config: TizhiConfig = toml::from_str(raw).map_err(|e| TizhiError::ConfigParse {
            reason: e.to_string(),
        })?;
        config.classify.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = TizhiConfig::from_toml_str("").unwrap();
        assert_eq!(config.classify.threshold_primary, 40.0);
        assert_eq!(config.classify.threshold_secondary, 30.0);
        assert_eq!(config.classify.threshold_peace, 60.0);
    }

    #[test]
    fn overrides_apply() {
        let config = TizhiConfig::from_toml_str(
            "[classify]\nthreshold_primary = 45.0\n\n[catalog]\nrecommendation_limit = 3\n",
        )
        .unwrap();
        assert_eq!(config.classify.threshold_primary, 45.0);
        assert_eq!(config.catalog.recommendation_limit, 3);
    }

    #[test]
    fn invalid_thresholds_rejected_at_load() {
        let result =
            TizhiConfig::from_toml_str("[classify]\nthreshold_secondary = 80.0\n");
        assert!(result.is_err());
    }
}
