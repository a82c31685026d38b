//! Persistence adapters for the message module.
//!
//! This module provides concrete implementations of the [`MessageRepository`]
//! port. Adapters handle all infrastructure concerns while the domain remains
//! pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryMessageRepository`]: Thread-safe in-memory storage for
//!   unit testing
//! - [`sqlite::SqliteMessageRepository`]: `SQLite` persistence using Diesel ORM
//!   and an r2d2 connection pool
//!
//! [`MessageRepository`]: crate::message::ports::MessageRepository

pub mod memory;
pub mod sqlite;
