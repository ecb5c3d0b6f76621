pub mod catalog_error;
pub mod classify_error;

pub use catalog_error::CatalogError;
pub use classify_error::ClassifyError;

/// Top-level error aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum TizhiError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("config parse failed: {reason}")]
    ConfigParse { reason: String },
}

/// Convenience alias used across the workspace.
pub type TizhiResult<T> = Result<T, TizhiError>;
