//! Port definitions for message persistence.

pub mod repository;

pub use repository::{
    MessageReader, MessageRepository, MessageStream, ReaderStream, RepositoryResult, read_only,
};
