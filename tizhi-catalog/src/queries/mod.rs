//! Per-kind CRUD and constitution lookup.

pub mod acupoint_ops;
pub mod course_ops;
pub mod ingredient_ops;
pub mod recipe_ops;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use tizhi_core::constitution::Constitution;
use tizhi_core::errors::TizhiResult;

use crate::{to_catalog_err, to_serde_err};

pub(crate) fn to_json<T: Serialize>(value: &T) -> TizhiResult<String> {
    serde_json::to_string(value).map_err(|e| to_serde_err(e.to_string()))
}

pub(crate) fn from_json<T: DeserializeOwned>(raw: &str) -> TizhiResult<T> {
    serde_json::from_str(raw).map_err(|e| to_serde_err(e.to_string()))
}

pub(crate) fn parse_uuid(raw: &str) -> TizhiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| to_catalog_err(format!("bad uuid {raw}: {e}")))
}

pub(crate) fn parse_timestamp(raw: &str) -> TizhiResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_catalog_err(format!("bad timestamp {raw}: {e}")))
}

/// SQL LIKE pattern matching a constitution name inside a JSON list column.
/// Candidates are re-checked against the deserialized list afterwards.
pub(crate) fn like_pattern(constitution: Constitution) -> String {
    format!("%\"{}\"%", constitution.as_str())
}
