//! Error taxonomy for the mapping layer.
//!
//! Callers are expected to branch on the variant: pool exhaustion is
//! transient and retryable with backoff, while schema and configuration
//! errors are caller bugs that no amount of retrying will fix. Backend
//! failures (constraint violations, malformed SQL) are wrapped in
//! [`Error::Query`] with the driver error carried verbatim as the source.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid connection configuration. Fatal, never retried.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid entity declaration or misuse of schema metadata
    /// (no primary key, duplicate primary keys, undeclared field, ...).
    #[error("schema error: {0}")]
    Schema(String),

    /// The pool was saturated and no connection freed up within the
    /// configured acquire timeout. Transient; safe to retry with backoff.
    #[error("timed out waiting for a database connection")]
    PoolTimeout,

    /// The pool has been closed; any further operation is a programmer error.
    #[error("connection pool is closed")]
    PoolClosed,

    /// A query failed on the backend. The native error is preserved
    /// uninterpreted so constraint details remain inspectable.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => Error::PoolTimeout,
            sqlx::Error::PoolClosed => Error::PoolClosed,
            sqlx::Error::Configuration(e) => Error::Config(e.to_string()),
            other => Error::Query(other),
        }
    }
}
