//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::message::domain::{Message, MessageId};

/// Body accepted by `POST /`.
///
/// `msg` is optional at the wire level so that a missing field reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    /// Text to store.
    #[serde(default)]
    pub msg: Option<String>,
}

/// A stored message as returned by every route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Generated identifier.
    pub id: MessageId,
    /// Stored text.
    pub message: String,
}

impl From<Message> for MessageBody {
    fn from(message: Message) -> Self {
        let (id, text) = message.into_parts();
        Self {
            id,
            message: text.into_inner(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description.
    pub error: String,
}
