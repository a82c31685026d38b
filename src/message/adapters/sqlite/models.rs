//! Diesel row models for message persistence.

use super::schema::messages;
use diesel::prelude::*;

/// Query result row for message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MessageRow {
    /// Message identifier in text form.
    pub id: String,
    /// Message body.
    pub message: String,
}

/// Insert model for message records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow<'a> {
    /// Message identifier in text form.
    pub id: String,
    /// Message body.
    pub message: &'a str,
}
