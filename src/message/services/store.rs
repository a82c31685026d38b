//! Service layer for storing and retrieving messages.

use crate::message::{
    domain::{Message, MessageText, ValidationError},
    error::RepositoryError,
    ports::{MessageRepository, RepositoryResult, read_only},
};
use crate::worker::{WorkerError, WorkerPool};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for message operations.
#[derive(Debug, Error)]
pub enum MessageServiceError {
    /// The submitted text failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// The worker pool could not run the operation.
    #[error(transparent)]
    Worker(#[from] WorkerError),
}

/// Result type for message service operations.
pub type MessageServiceResult<T> = Result<T, MessageServiceError>;

/// Message orchestration service.
///
/// Validation happens on the caller's thread. Blocking repository calls either
/// run on the [`WorkerPool`] (the `async` methods) or inline on the caller's
/// thread ([`Self::stream_all`]).
pub struct MessageService<R>
where
    R: MessageRepository,
{
    repository: Arc<R>,
    workers: WorkerPool,
}

impl<R> Clone for MessageService<R>
where
    R: MessageRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            workers: self.workers.clone(),
        }
    }
}

impl<R> MessageService<R>
where
    R: MessageRepository + 'static,
{
    /// Creates a new message service.
    #[must_use]
    pub const fn new(repository: Arc<R>, workers: WorkerPool) -> Self {
        Self {
            repository,
            workers,
        }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Returns the worker pool used for blocking calls.
    #[must_use]
    pub const fn workers(&self) -> &WorkerPool {
        &self.workers
    }

    /// Validates `msg` and persists it as a new message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageServiceError::Validation`] without touching the store
    /// when `msg` is missing or blank, and the repository or worker error
    /// otherwise.
    pub async fn create(&self, msg: Option<String>) -> MessageServiceResult<Message> {
        let text = MessageText::from_field(msg)?;
        let repository = Arc::clone(&self.repository);
        let message = self
            .workers
            .submit(move || repository.create(text))
            .await??;
        info!(message_id = %message.id(), "message saved");
        Ok(message)
    }

    /// Loads every message on the worker pool.
    ///
    /// # Errors
    ///
    /// Returns the repository or worker error.
    pub async fn list_all(&self) -> MessageServiceResult<Vec<Message>> {
        let repository = Arc::clone(&self.repository);
        Ok(self.workers.submit(move || repository.list_all()).await??)
    }

    /// Streams every message on the calling thread.
    ///
    /// This blocks; from async code wrap it in
    /// [`tokio::task::block_in_place`]. The stream is dropped before this
    /// returns, so its connection is back in the pool on every path.
    ///
    /// # Errors
    ///
    /// Returns the first repository error the stream produces.
    pub fn stream_all(&self) -> MessageServiceResult<Vec<Message>> {
        let stream = self.repository.stream_all()?;
        Ok(drain_logged(stream)?)
    }

    /// Streams every message inside a read-only scope on the worker pool.
    ///
    /// # Errors
    ///
    /// Returns the repository or worker error. The scope is closed and its
    /// connection released before the error is reported.
    pub async fn list_in_transaction(&self) -> MessageServiceResult<Vec<Message>> {
        let repository = Arc::clone(&self.repository);
        let messages = self
            .workers
            .submit(move || {
                read_only(&*repository, |reader| {
                    drain_logged(reader.stream_all()?)
                })
            })
            .await??;
        Ok(messages)
    }
}

fn drain_logged<I>(stream: I) -> RepositoryResult<Vec<Message>>
where
    I: Iterator<Item = RepositoryResult<Message>>,
{
    stream
        .inspect(|item| {
            if let Ok(message) = item {
                info!(message_id = %message.id(), "streamed message");
            }
        })
        .collect()
}
