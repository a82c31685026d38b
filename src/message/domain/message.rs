//! The stored message record and its validated text.

use super::{MessageId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message text that is guaranteed to contain at least one non-whitespace
/// character.
///
/// The text is kept exactly as supplied; validation never trims it.
///
/// # Examples
///
/// ```
/// use message_store::message::domain::{MessageText, ValidationError};
///
/// let text = MessageText::new("hello").expect("valid text");
/// assert_eq!(text.as_str(), "hello");
/// assert_eq!(MessageText::new("  "), Err(ValidationError::EmptyText));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageText(String);

impl MessageText {
    /// Validates and wraps message text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyText`] when the text is empty or
    /// whitespace-only.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let owned = text.into();
        if owned.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(Self(owned))
    }

    /// Validates an optional request field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingText`] when `text` is `None`, or
    /// [`ValidationError::EmptyText`] when it is blank.
    pub fn from_field(text: Option<String>) -> Result<Self, ValidationError> {
        text.map_or(Err(ValidationError::MissingText), Self::new)
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageText> for String {
    fn from(value: MessageText) -> Self {
        value.0
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    text: MessageText,
}

impl Message {
    /// Creates a message with a freshly generated identifier.
    #[must_use]
    pub fn new(text: MessageText) -> Self {
        Self {
            id: MessageId::new(),
            text,
        }
    }

    /// Reconstructs a message from persisted parts.
    #[must_use]
    pub const fn from_persisted(id: MessageId, text: MessageText) -> Self {
        Self { id, text }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Splits the message into its identifier and text.
    #[must_use]
    pub fn into_parts(self) -> (MessageId, MessageText) {
        (self.id, self.text)
    }
}
