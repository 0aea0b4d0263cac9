//! Storage-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Not-found is deliberately absent: lookups return `Option`, so every
/// variant here is terminal for the request and answered with a generic 500.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
