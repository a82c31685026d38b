//! Lazy, page-at-a-time message cursor.
//!
//! The cursor walks the `messages` table in primary-key order using keyset
//! pagination, so it never materialises the whole table. It is generic over
//! how it holds its connection: an owned pooled connection for standalone
//! streams, or a borrowed connection inside a read-only scope.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use std::num::NonZeroU32;
use std::ops::DerefMut;

use super::conversion::row_to_message;
use super::models::MessageRow;
use super::schema::messages;
use crate::message::{domain::Message, error::RepositoryError, ports::RepositoryResult};

/// Iterator over stored messages that fetches one page per round trip.
pub(super) struct PagedCursor<C> {
    conn: C,
    page_size: NonZeroU32,
    last_id: Option<String>,
    buffer: std::vec::IntoIter<MessageRow>,
    exhausted: bool,
}

impl<C> PagedCursor<C>
where
    C: DerefMut<Target = SqliteConnection>,
{
    pub(super) fn new(conn: C, page_size: NonZeroU32) -> Self {
        Self {
            conn,
            page_size,
            last_id: None,
            buffer: Vec::new().into_iter(),
            exhausted: false,
        }
    }

    fn fetch_page(&mut self) -> RepositoryResult<Vec<MessageRow>> {
        let mut query = messages::table
            .select(MessageRow::as_select())
            .order(messages::id.asc())
            .limit(i64::from(self.page_size.get()))
            .into_boxed::<Sqlite>();
        if let Some(last_id) = &self.last_id {
            query = query.filter(messages::id.gt(last_id.clone()));
        }
        query
            .load::<MessageRow>(&mut *self.conn)
            .map_err(RepositoryError::database)
    }

    fn is_short_page(&self, rows: usize) -> bool {
        usize::try_from(self.page_size.get()).map_or(true, |size| rows < size)
    }
}

impl<C> Iterator for PagedCursor<C>
where
    C: DerefMut<Target = SqliteConnection>,
{
    type Item = RepositoryResult<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(row) = self.buffer.next() {
                self.last_id = Some(row.id.clone());
                return Some(row_to_message(row));
            }
            if self.exhausted {
                return None;
            }
            match self.fetch_page() {
                Ok(rows) => {
                    self.exhausted = self.is_short_page(rows.len());
                    self.buffer = rows.into_iter();
                }
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err));
                }
            }
        }
    }
}
