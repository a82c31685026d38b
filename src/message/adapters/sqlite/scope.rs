//! Read-only transactional scope over a pooled connection.

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use std::ops::{Deref, DerefMut};

use super::pool::{PooledConn, SqlitePool, get_conn};
use crate::message::{error::RepositoryError, ports::RepositoryResult};

/// Pooled connection with `query_only` enabled for its lifetime.
///
/// Dropping the guard switches `query_only` back off before the connection
/// returns to the pool, on every exit path including unwinding.
pub(super) struct ReadOnlyConnection {
    conn: PooledConn,
}

impl ReadOnlyConnection {
    /// Checks a connection out of `pool` and disables writes on it.
    pub(super) fn acquire(pool: &SqlitePool) -> RepositoryResult<Self> {
        let mut conn = get_conn(pool)?;
        conn.batch_execute("PRAGMA query_only = ON")
            .map_err(|e| RepositoryError::transaction(format!("enable query_only: {e}")))?;
        Ok(Self { conn })
    }
}

impl Deref for ReadOnlyConnection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for ReadOnlyConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

impl Drop for ReadOnlyConnection {
    fn drop(&mut self) {
        if let Err(err) = self.conn.batch_execute("PRAGMA query_only = OFF") {
            tracing::warn!(error = %err, "failed to reset query_only on pooled connection");
        }
    }
}
