//! Error types shared by the storage layer
//!
//! Repository adapters surface these as the opaque "storage" failure kind.

use sqlx::Error as SqlxError;
use sqlx::migrate::MigrateError;
use thiserror::Error;

/// Failures raised while talking to PostgreSQL
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not open a connection
    #[error("database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A statement failed to execute
    #[error("database query error: {0}")]
    Query(#[source] SqlxError),

    /// Applying the embedded schema migrations failed
    #[error("database migration error: {0}")]
    Migration(#[source] MigrateError),

    /// The supplied settings could not be used
    #[error("database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
