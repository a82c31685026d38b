//! Domain types for stored messages.
//!
//! A [`Message`] pairs a generated [`MessageId`] with validated
//! [`MessageText`]. Both parts are immutable once constructed.

mod error;
mod ids;
mod message;

pub use error::ValidationError;
pub use ids::MessageId;
pub use message::{Message, MessageText};
