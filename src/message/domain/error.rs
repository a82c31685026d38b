//! Validation errors raised while constructing message values.

use thiserror::Error;

/// Errors returned when message input fails validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The request did not carry any message text.
    #[error("msg may not be null")]
    MissingText,

    /// The message text is empty or whitespace-only.
    #[error("msg may not be empty")]
    EmptyText,
}
