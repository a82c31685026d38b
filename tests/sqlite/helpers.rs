//! Shared test helpers for `SQLite` integration tests.

use std::num::NonZeroU32;

use diesel::prelude::*;
use message_store::message::{
    adapters::sqlite::{SqliteMessageRepository, SqlitePool, build_pool},
    domain::{Message, MessageText},
    ports::MessageRepository,
};
use rstest::fixture;
use tempfile::TempDir;

/// Rows per cursor page in tests; small so streams span several pages.
pub const PAGE_SIZE: u32 = 2;

/// Repository backed by a throwaway database file.
pub struct TestStore {
    /// Keeps the database directory alive for the test's duration.
    pub dir: TempDir,
    /// Repository under test.
    pub repo: SqliteMessageRepository,
}

impl TestStore {
    /// Opens a fresh database with `pool_size` connections.
    ///
    /// # Panics
    ///
    /// Panics if the database cannot be created.
    #[must_use]
    pub fn open(pool_size: u32) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = open_repo(&dir, pool_size);
        repo.migrate().expect("schema");
        Self { dir, repo }
    }

    /// Returns the repository's pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        self.repo.pool()
    }

    /// Persists one message per entry in `texts`.
    ///
    /// # Panics
    ///
    /// Panics if any insert fails.
    pub fn seed(&self, texts: &[&str]) -> Vec<Message> {
        texts
            .iter()
            .map(|text| {
                self.repo
                    .create(MessageText::new(*text).expect("valid text"))
                    .expect("create")
            })
            .collect()
    }

    /// Executes raw SQL on a pooled connection, bypassing the repository.
    ///
    /// # Panics
    ///
    /// Panics if the statement fails.
    pub fn execute(&self, sql: &str) {
        let mut conn = self.pool().get().expect("connection");
        diesel::sql_query(sql).execute(&mut conn).expect("raw sql");
    }
}

/// Opens a repository over the database in `dir` without migrating.
///
/// # Panics
///
/// Panics if the pool cannot be built.
#[must_use]
pub fn open_repo(dir: &TempDir, pool_size: u32) -> SqliteMessageRepository {
    let path = dir.path().join("messages.db");
    let pool = build_pool(
        &path.to_string_lossy(),
        NonZeroU32::new(pool_size).expect("non-zero pool size"),
    )
    .expect("pool");
    SqliteMessageRepository::new(pool)
        .with_page_size(NonZeroU32::new(PAGE_SIZE).expect("non-zero page size"))
}

/// Store with two pooled connections.
#[fixture]
pub fn store() -> TestStore {
    TestStore::open(2)
}

/// Store with a single pooled connection, so every call reuses it.
#[fixture]
pub fn single_conn_store() -> TestStore {
    TestStore::open(1)
}

/// Asserts that every connection the pool holds is idle.
///
/// # Panics
///
/// Panics if a connection is still checked out.
pub fn assert_all_idle(pool: &SqlitePool) {
    let state = pool.state();
    assert_eq!(
        state.idle_connections, state.connections,
        "a connection is still checked out: {state:?}"
    );
}
