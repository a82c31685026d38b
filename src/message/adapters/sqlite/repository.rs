//! `SQLite` repository implementation for message storage.

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use std::num::NonZeroU32;

use super::conversion::{row_to_message, to_new_row};
use super::cursor::PagedCursor;
use super::models::MessageRow;
use super::pool::{SqlitePool, get_conn};
use super::schema::messages;
use super::scope::ReadOnlyConnection;
use crate::message::{
    domain::{Message, MessageText},
    error::RepositoryError,
    ports::{MessageReader, MessageRepository, MessageStream, ReaderStream, RepositoryResult},
};

/// Rows fetched per cursor round trip unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = NonZeroU32::MIN.saturating_add(63);

const CREATE_MESSAGES_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_messages/up.sql");

/// `SQLite` implementation of [`MessageRepository`].
///
/// Uses Diesel ORM with connection pooling via r2d2. All methods block the
/// calling thread; run them on a worker pool from async code.
///
/// # Example
///
/// ```no_run
/// use std::num::NonZeroU32;
/// use message_store::message::adapters::sqlite::{SqliteMessageRepository, build_pool};
///
/// let pool = build_pool("messages.db", NonZeroU32::MIN).expect("pool");
/// let repo = SqliteMessageRepository::new(pool);
/// repo.migrate().expect("schema");
/// ```
#[derive(Debug, Clone)]
pub struct SqliteMessageRepository {
    pool: SqlitePool,
    page_size: NonZeroU32,
}

impl SqliteMessageRepository {
    /// Creates a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets how many rows each stream fetches per round trip.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: NonZeroU32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the message table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if a connection cannot be obtained or the
    /// DDL fails.
    pub fn migrate(&self) -> RepositoryResult<()> {
        let mut conn = get_conn(&self.pool)?;
        conn.batch_execute(CREATE_MESSAGES_SQL)
            .map_err(RepositoryError::database)
    }
}

impl MessageRepository for SqliteMessageRepository {
    fn create(&self, text: MessageText) -> RepositoryResult<Message> {
        let message = Message::new(text);
        let mut conn = get_conn(&self.pool)?;
        diesel::insert_into(messages::table)
            .values(&to_new_row(&message))
            .execute(&mut conn)
            .map_err(RepositoryError::database)?;
        Ok(message)
    }

    fn list_all(&self) -> RepositoryResult<Vec<Message>> {
        let mut conn = get_conn(&self.pool)?;
        let rows = messages::table
            .select(MessageRow::as_select())
            .load::<MessageRow>(&mut conn)
            .map_err(RepositoryError::database)?;
        rows.into_iter().map(row_to_message).collect()
    }

    fn stream_all(&self) -> RepositoryResult<MessageStream> {
        let conn = get_conn(&self.pool)?;
        Ok(Box::new(PagedCursor::new(conn, self.page_size)))
    }

    fn read_only(
        &self,
        work: &mut dyn FnMut(&mut dyn MessageReader) -> RepositoryResult<()>,
    ) -> RepositoryResult<()> {
        let page_size = self.page_size;
        let mut conn = ReadOnlyConnection::acquire(&self.pool)?;
        conn.transaction::<_, RepositoryError, _>(|tx_conn| {
            let mut reader = ScopedReader {
                conn: tx_conn,
                page_size,
            };
            work(&mut reader)
        })
    }
}

/// Reader handed to read-only work; borrows the scope's connection.
struct ScopedReader<'c> {
    conn: &'c mut SqliteConnection,
    page_size: NonZeroU32,
}

impl MessageReader for ScopedReader<'_> {
    fn stream_all(&mut self) -> RepositoryResult<ReaderStream<'_>> {
        Ok(Box::new(PagedCursor::new(&mut *self.conn, self.page_size)))
    }
}
