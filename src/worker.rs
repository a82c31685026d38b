//! Bounded pool for blocking work.
//!
//! Store calls block their thread. [`WorkerPool::submit`] moves such a call
//! onto tokio's blocking threads and hands the caller a future of its result,
//! so HTTP handlers can wait without occupying a request-handling thread. A
//! semaphore caps how many submitted tasks run at once.

use std::num::NonZeroUsize;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinError;

/// Errors surfaced when a submitted task cannot deliver its result.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The pool stopped accepting work.
    #[error("worker pool is closed")]
    Closed,

    /// The task panicked or was aborted before completing.
    #[error("worker task failed: {0}")]
    Join(#[from] JoinError),
}

/// Pool that runs blocking closures off the async executor.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: NonZeroUsize,
}

impl WorkerPool {
    /// Creates a pool allowing `size` tasks to run concurrently.
    #[must_use]
    pub fn new(size: NonZeroUsize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(size.get())),
            size,
        }
    }

    /// Returns the maximum number of concurrently running tasks.
    #[must_use]
    pub const fn size(&self) -> NonZeroUsize {
        self.size
    }

    /// Returns how many more tasks could start right now.
    #[must_use]
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Runs `task` on a blocking thread once a slot is free.
    ///
    /// The returned future resolves with the task's output. Dropping the
    /// future before it resolves does not stop a task that already started.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Join`] if the task panics and
    /// [`WorkerError::Closed`] if the pool has been shut down.
    pub async fn submit<F, T>(&self, task: F) -> Result<T, WorkerError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| WorkerError::Closed)?;
        let output = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            task()
        })
        .await?;
        Ok(output)
    }

    /// Stops accepting new tasks. Tasks already running are unaffected.
    pub fn close(&self) {
        self.permits.close();
    }
}
