//! Persistence error types for the message store.
//!
//! Uses `thiserror` for typed variants that callers can inspect.

use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while persisting or reading messages.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The database rejected or failed a statement.
    #[error("database error: {0}")]
    Database(Arc<dyn std::error::Error + Send + Sync>),

    /// A connection could not be obtained or established.
    #[error("connection error: {0}")]
    Connection(String),

    /// A stored row could not be mapped to a domain message.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A transactional scope could not be opened or completed.
    #[error("transaction error: {0}")]
    Transaction(String),
}

impl RepositoryError {
    /// Creates a database error from any error type.
    #[must_use]
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Arc::new(err))
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a transaction error.
    #[must_use]
    pub fn transaction(message: impl Into<String>) -> Self {
        Self::Transaction(message.into())
    }
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::database(err)
    }
}
