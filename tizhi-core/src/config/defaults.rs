//! Default configuration values.

/// Converted score at or above which a non-peace dimension is marked biased.
pub const DEFAULT_THRESHOLD_PRIMARY: f64 = 40.0;

/// Converted score at or above which a dimension shows a tendency.
pub const DEFAULT_THRESHOLD_SECONDARY: f64 = 30.0;

/// Peace score required for the balanced verdict.
pub const DEFAULT_THRESHOLD_PEACE: f64 = 60.0;

/// Default catalog database file.
pub const DEFAULT_DB_PATH: &str = "tizhi.db";

/// Maximum recommendations returned per catalog kind.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Whether secondary constitutions contribute to recommendations.
pub const DEFAULT_INCLUDE_SECONDARY: bool = true;
