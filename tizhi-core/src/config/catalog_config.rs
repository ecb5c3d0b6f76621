use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Catalog subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the SQLite database file.
    pub db_path: PathBuf,
    /// Maximum recommendations returned per catalog kind.
    pub recommendation_limit: usize,
    /// Whether secondary constitutions contribute to recommendations.
    pub include_secondary: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(defaults::DEFAULT_DB_PATH),
            recommendation_limit: defaults::DEFAULT_RECOMMENDATION_LIMIT,
            include_secondary: defaults::DEFAULT_INCLUDE_SECONDARY,
        }
    }
}
