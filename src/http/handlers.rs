//! Route handlers.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::dto::{CreateMessageRequest, MessageBody};
use super::error::ApiResult;
use crate::message::{domain::Message, ports::MessageRepository, services::MessageService};

type Service<R> = State<Arc<MessageService<R>>>;

fn bodies(messages: Vec<Message>) -> Json<Vec<MessageBody>> {
    Json(messages.into_iter().map(MessageBody::from).collect())
}

/// `POST /`
pub(super) async fn create<R>(
    State(service): Service<R>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> ApiResult<Json<MessageBody>>
where
    R: MessageRepository + 'static,
{
    let Json(request) = payload?;
    let message = service.create(request.msg).await?;
    Ok(Json(message.into()))
}

/// `GET /future`
pub(super) async fn list_future<R>(State(service): Service<R>) -> ApiResult<Json<Vec<MessageBody>>>
where
    R: MessageRepository + 'static,
{
    Ok(bodies(service.list_all().await?))
}

/// `GET /stream`
pub(super) async fn list_stream<R>(State(service): Service<R>) -> ApiResult<Json<Vec<MessageBody>>>
where
    R: MessageRepository + 'static,
{
    let messages = tokio::task::block_in_place(|| service.stream_all())?;
    Ok(bodies(messages))
}

/// `/` for every method but `POST`
pub(super) async fn list_in_transaction<R>(
    State(service): Service<R>,
) -> ApiResult<Json<Vec<MessageBody>>>
where
    R: MessageRepository + 'static,
{
    Ok(bodies(service.list_in_transaction().await?))
}
