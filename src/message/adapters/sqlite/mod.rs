//! `SQLite` implementation of the `MessageRepository` port using Diesel ORM.
//!
//! Connections come from an r2d2 pool. Streams own their pooled connection
//! and page through the table by primary key; the read-only scope pins one
//! connection inside a deferred transaction with writes disabled.

mod conversion;
mod cursor;
mod models;
mod pool;
mod repository;
mod schema;
mod scope;

pub use pool::{PooledConn, SqlitePool, build_pool};
pub use repository::{DEFAULT_PAGE_SIZE, SqliteMessageRepository};
