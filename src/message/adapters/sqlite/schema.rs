//! Diesel schema for message persistence.

diesel::table! {
    /// Stored message records.
    messages (id) {
        /// Hyphenated lowercase UUID of the message.
        id -> Text,
        /// Message body; never empty.
        message -> Text,
    }
}
