//! In-memory implementation of the `MessageRepository` port.
//!
//! Provides a simple, thread-safe repository for unit testing
//! without database dependencies. Not suitable for production use.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::message::{
    domain::{Message, MessageId, MessageText},
    error::RepositoryError,
    ports::{MessageReader, MessageRepository, MessageStream, ReaderStream, RepositoryResult},
};

/// In-memory implementation of [`MessageRepository`].
///
/// Thread-safe via internal [`RwLock`]. Streams iterate over a snapshot taken
/// when the stream opens; the read-only scope holds the read lock for its
/// whole duration.
///
/// # Example
///
/// ```
/// use message_store::message::adapters::memory::InMemoryMessageRepository;
/// use message_store::message::domain::MessageText;
/// use message_store::message::ports::MessageRepository;
///
/// let repo = InMemoryMessageRepository::new();
/// let saved = repo
///     .create(MessageText::new("hello").expect("valid text"))
///     .expect("create");
/// assert_eq!(repo.list_all().expect("list"), vec![saved]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<HashMap<MessageId, Message>>>,
}

impl InMemoryMessageRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the internal lock is poisoned.
    pub fn len(&self) -> RepositoryResult<usize> {
        let guard = self.messages.read().map_err(lock_err)?;
        Ok(guard.len())
    }

    /// Returns `true` when no messages are stored.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the internal lock is poisoned.
    pub fn is_empty(&self) -> RepositoryResult<bool> {
        self.len().map(|count| count == 0)
    }

    fn snapshot(&self) -> RepositoryResult<Vec<Message>> {
        let guard = self.messages.read().map_err(lock_err)?;
        Ok(guard.values().cloned().collect())
    }
}

fn lock_err<T>(err: PoisonError<T>) -> RepositoryError {
    RepositoryError::database(std::io::Error::other(err.to_string()))
}

impl MessageRepository for InMemoryMessageRepository {
    fn create(&self, text: MessageText) -> RepositoryResult<Message> {
        let message = Message::new(text);
        let mut guard = self.messages.write().map_err(lock_err)?;
        guard.insert(message.id(), message.clone());
        Ok(message)
    }

    fn list_all(&self) -> RepositoryResult<Vec<Message>> {
        self.snapshot()
    }

    fn stream_all(&self) -> RepositoryResult<MessageStream> {
        Ok(Box::new(self.snapshot()?.into_iter().map(Ok)))
    }

    fn read_only(
        &self,
        work: &mut dyn FnMut(&mut dyn MessageReader) -> RepositoryResult<()>,
    ) -> RepositoryResult<()> {
        let guard = self.messages.read().map_err(lock_err)?;
        let mut reader = LockedReader {
            messages: &guard,
        };
        work(&mut reader)
    }
}

/// Reader over the map while the scope holds the read lock.
struct LockedReader<'a> {
    messages: &'a HashMap<MessageId, Message>,
}

impl MessageReader for LockedReader<'_> {
    fn stream_all(&mut self) -> RepositoryResult<ReaderStream<'_>> {
        Ok(Box::new(self.messages.values().cloned().map(Ok)))
    }
}
