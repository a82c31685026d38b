//! Conversions between message rows and domain messages.

use super::models::{MessageRow, NewMessageRow};
use crate::message::{
    domain::{Message, MessageId, MessageText},
    error::RepositoryError,
    ports::RepositoryResult,
};

fn ser_err<E: std::fmt::Display>(e: E) -> RepositoryError {
    RepositoryError::serialization(e.to_string())
}

/// Builds the insert row for a domain message.
pub(super) fn to_new_row(message: &Message) -> NewMessageRow<'_> {
    NewMessageRow {
        id: message.id().to_string(),
        message: message.text(),
    }
}

/// Converts a database row to a domain message.
///
/// # Errors
///
/// Returns [`RepositoryError::Serialization`] if the stored identifier is not
/// a UUID or the stored text violates the non-empty invariant.
pub(super) fn row_to_message(row: MessageRow) -> RepositoryResult<Message> {
    let MessageRow {
        id: raw_id,
        message: raw_text,
    } = row;
    let id = raw_id.parse::<MessageId>().map_err(ser_err)?;
    let text = MessageText::new(raw_text).map_err(ser_err)?;
    Ok(Message::from_persisted(id, text))
}
