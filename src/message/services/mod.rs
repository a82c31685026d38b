//! Application services for the message store.
//!
//! Services validate input, decide which thread runs each blocking repository
//! call, and log what they store and stream.

mod store;

pub use store::{MessageService, MessageServiceError, MessageServiceResult};
