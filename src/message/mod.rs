//! Message storage and retrieval.
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: [`domain::Message`], its identifier and validated text
//! - **Ports**: the blocking [`ports::MessageRepository`] trait and its
//!   read-only scope
//! - **Adapters**: [`adapters::sqlite::SqliteMessageRepository`] and
//!   [`adapters::memory::InMemoryMessageRepository`]
//! - **Services**: [`services::MessageService`], which dispatches repository
//!   calls onto the worker pool
//!
//! # Example
//!
//! ```
//! use message_store::message::adapters::memory::InMemoryMessageRepository;
//! use message_store::message::domain::MessageText;
//! use message_store::message::ports::MessageRepository;
//!
//! let repo = InMemoryMessageRepository::new();
//! let stored = repo
//!     .create(MessageText::new("hello").expect("valid text"))
//!     .expect("create");
//! let all = repo.list_all().expect("list");
//! assert_eq!(all, vec![stored]);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
