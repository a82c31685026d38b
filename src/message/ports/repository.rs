//! Repository port for message persistence.
//!
//! The port is blocking: implementations talk to their backend on the calling
//! thread, and callers decide where that thread comes from (see
//! [`crate::worker::WorkerPool`]).

use crate::message::{
    domain::{Message, MessageText},
    error::RepositoryError,
};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Lazy sequence of messages that owns its backend resources.
///
/// The stream holds whatever the backend needs to keep producing rows (for
/// SQL backends, a pooled connection). Dropping the stream releases those
/// resources, whether or not it was fully consumed.
pub type MessageStream = Box<dyn Iterator<Item = RepositoryResult<Message>> + Send>;

/// Lazy sequence of messages borrowed from an open read-only scope.
pub type ReaderStream<'a> = Box<dyn Iterator<Item = RepositoryResult<Message>> + 'a>;

/// Read access available inside a read-only transactional scope.
pub trait MessageReader {
    /// Streams all messages using the scope's connection.
    ///
    /// Every page of the stream observes the same snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the stream cannot be opened.
    fn stream_all(&mut self) -> RepositoryResult<ReaderStream<'_>>;
}

/// Port for message persistence operations.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Message IDs are unique across the store
/// - Messages are immutable after storage (no update or delete operations)
/// - Streams and scopes release their backend resources on every exit path
pub trait MessageRepository: Send + Sync {
    /// Persists a new message with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backend rejects the insert.
    fn create(&self, text: MessageText) -> RepositoryResult<Message>;

    /// Returns every stored message, eagerly materialised, in unspecified
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the query fails.
    fn list_all(&self) -> RepositoryResult<Vec<Message>>;

    /// Returns every stored message as a lazy stream.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backend resources for the stream
    /// cannot be acquired. Failures while producing later items are yielded
    /// as `Err` items.
    fn stream_all(&self) -> RepositoryResult<MessageStream>;

    /// Runs `work` inside a read-only transactional scope.
    ///
    /// The scope is committed when `work` succeeds and rolled back when it
    /// fails; the underlying connection is released in both cases and when
    /// `work` panics. Prefer the typed [`read_only`] helper.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `work`, or [`RepositoryError`] if the
    /// scope cannot be opened or completed.
    fn read_only(
        &self,
        work: &mut dyn FnMut(&mut dyn MessageReader) -> RepositoryResult<()>,
    ) -> RepositoryResult<()>;
}

/// Runs `work` inside a read-only transactional scope and returns its value.
///
/// # Examples
///
/// ```
/// use message_store::message::adapters::memory::InMemoryMessageRepository;
/// use message_store::message::domain::MessageText;
/// use message_store::message::ports::{MessageRepository, read_only};
///
/// let repo = InMemoryMessageRepository::new();
/// repo.create(MessageText::new("hello").expect("valid text"))
///     .expect("create");
///
/// let messages = read_only(&repo, |reader| reader.stream_all()?.collect::<Result<Vec<_>, _>>())
///     .expect("read-only scope");
/// assert_eq!(messages.len(), 1);
/// ```
///
/// # Errors
///
/// Returns the error produced by `work` or by the scope itself.
pub fn read_only<R, T, F>(repository: &R, work: F) -> RepositoryResult<T>
where
    R: MessageRepository + ?Sized,
    F: FnOnce(&mut dyn MessageReader) -> RepositoryResult<T>,
{
    let mut pending = Some(work);
    let mut output = None;
    repository.read_only(&mut |reader| {
        let run = pending
            .take()
            .ok_or_else(|| RepositoryError::transaction("read-only work invoked twice"))?;
        output = Some(run(reader)?);
        Ok(())
    })?;
    output.ok_or_else(|| RepositoryError::transaction("read-only scope did not run its work"))
}
