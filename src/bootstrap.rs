//! Explicit wiring of the message store and the server run loop.
//!
//! Construction order: connection pool, repository (with schema applied),
//! worker pool, service, router.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Settings;
use crate::http;
use crate::message::{
    adapters::sqlite::{SqliteMessageRepository, build_pool},
    error::RepositoryError,
    services::MessageService,
};
use crate::worker::WorkerPool;

/// Service type served by the binary.
pub type AppService = MessageService<SqliteMessageRepository>;

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The database could not be opened or migrated.
    #[error("failed to open message store: {0}")]
    Store(#[from] RepositoryError),

    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The server loop failed.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Opens the configured database and applies the schema.
///
/// # Errors
///
/// Returns [`StartupError::Store`] if the pool cannot be built or the schema
/// cannot be applied.
pub fn build_repository(settings: &Settings) -> Result<SqliteMessageRepository, StartupError> {
    let pool = build_pool(&settings.database_url, settings.database_pool_size)?;
    let repository = SqliteMessageRepository::new(pool).with_page_size(settings.stream_page_size);
    repository.migrate()?;
    Ok(repository)
}

/// Builds the service on top of the configured repository and worker pool.
///
/// # Errors
///
/// Returns [`StartupError::Store`] if the repository cannot be opened.
pub fn build_service(settings: &Settings) -> Result<Arc<AppService>, StartupError> {
    let repository = build_repository(settings)?;
    let workers = WorkerPool::new(settings.worker_pool_size);
    Ok(Arc::new(MessageService::new(Arc::new(repository), workers)))
}

/// Builds the fully wired router.
///
/// # Errors
///
/// Returns [`StartupError::Store`] if the repository cannot be opened.
pub fn build_router(settings: &Settings) -> Result<Router, StartupError> {
    Ok(http::router(build_service(settings)?))
}

/// Binds the configured address and serves until interrupted.
///
/// # Errors
///
/// Returns [`StartupError`] if wiring, binding, or serving fails.
pub async fn run(settings: &Settings) -> Result<(), StartupError> {
    let service = build_service(settings)?;
    let worker_pool_size = service.workers().size();
    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: settings.bind_addr,
            source,
        })?;
    info!(
        bind_addr = %settings.bind_addr,
        database_url = %settings.database_url,
        database_pool_size = settings.database_pool_size.get(),
        worker_pool_size = worker_pool_size.get(),
        "message store listening"
    );
    serve(listener, http::router(service)).await
}

/// Serves `router` on `listener` until ctrl-c is received.
///
/// # Errors
///
/// Returns [`StartupError::Serve`] if the server loop fails.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), StartupError> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;
    info!("message store stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to install ctrl-c handler; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
