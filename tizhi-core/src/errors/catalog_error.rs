/// Catalog storage errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed: {reason}")]
    MigrationFailed { reason: String },

    #[error("serialization error: {message}")]
    SerializationError { message: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}
