//! HTTP surface of the message store.
//!
//! | Route | Strategy |
//! |---|---|
//! | `POST /` | validate inline, persist on the worker pool |
//! | `GET /future` | eager list on the worker pool |
//! | `GET /stream` | lazy stream drained on the handling thread |
//! | `/` (any other method) | lazy stream drained inside a read-only scope on the worker pool |
//!
//! `GET /stream` uses [`tokio::task::block_in_place`], so the router must be
//! served from a multi-threaded runtime.

mod dto;
mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};

use crate::message::{ports::MessageRepository, services::MessageService};

pub use dto::{CreateMessageRequest, ErrorBody, MessageBody};
pub use error::{ApiError, ApiResult};

/// Builds the router for all message routes.
pub fn router<R>(service: Arc<MessageService<R>>) -> Router
where
    R: MessageRepository + 'static,
{
    Router::new()
        .route(
            "/",
            any(handlers::list_in_transaction::<R>).post(handlers::create::<R>),
        )
        .route("/future", get(handlers::list_future::<R>))
        .route("/stream", get(handlers::list_stream::<R>))
        .with_state(service)
}
