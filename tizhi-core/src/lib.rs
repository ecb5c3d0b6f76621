//! # tizhi-core
//!
//! Foundation crate for the Tizhi constitution backend.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod constitution;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CatalogConfig, ClassifyConfig, TizhiConfig};
pub use constitution::{Constitution, DimensionMap, Score, ScoreVector, Tendency, TendencyMap};
pub use errors::{TizhiError, TizhiResult};
pub use models::{Question, Report};
