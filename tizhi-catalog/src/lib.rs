//! # tizhi-catalog
//!
//! SQLite-backed catalog for the four content kinds the app recommends from:
//! ingredients, recipes, acupoints, and courses. Lookup is indexed by the
//! constitution a classification report produced.

pub mod migrations;
pub mod queries;
pub mod recommend;
pub mod store;

pub use recommend::{RecommendationSet, Recommender};
pub use store::CatalogEngine;

use tizhi_core::errors::{CatalogError, TizhiError};

/// Map a low-level SQLite failure into the catalog error type.
pub(crate) fn to_catalog_err(message: impl Into<String>) -> TizhiError {
    TizhiError::Catalog(CatalogError::SqliteError {
        message: message.into(),
    })
}

/// Map a JSON (de)serialization failure into the catalog error type.
pub(crate) fn to_serde_err(message: impl Into<String>) -> TizhiError {
    TizhiError::Catalog(CatalogError::SerializationError {
        message: message.into(),
    })
}
