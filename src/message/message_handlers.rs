use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::Result, state::AppState};

use super::{
    message_dto::{
        CreateMessageRequest, DeleteMessageResponse, MessageListResponse, SingleMessageResponse,
        UpdateMessageRequest,
    },
    message_models::Message,
};

/// Get all messages
#[utoipa::path(
    get,
    path = "/messages",
    responses(
        (status = 200, description = "All messages, oldest first", body = MessageListResponse)
    ),
    tag = "messages"
)]
pub async fn get_messages(State(state): State<AppState>) -> Result<Json<MessageListResponse>> {
    let messages = state.message_service.list_messages().await?;
    Ok(Json(MessageListResponse { messages }))
}

/// Get one message by id
#[utoipa::path(
    get,
    path = "/messages/{message_id}",
    params(
        ("message_id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "The matching message, or null", body = SingleMessageResponse),
        (status = 400, description = "Malformed message id")
    ),
    tag = "messages"
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
) -> Result<Json<SingleMessageResponse>> {
    let message = state.message_service.get_message(message_id).await?;
    Ok(Json(SingleMessageResponse { message }))
}

/// Create a new message and link it on its author
#[utoipa::path(
    post,
    path = "/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created", body = Message),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Author does not exist")
    ),
    tag = "messages"
)]
pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let message = state.message_service.create_message(payload).await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Update an existing message
#[utoipa::path(
    put,
    path = "/messages/{message_id}",
    params(
        ("message_id" = Uuid, Path, description = "Message ID")
    ),
    request_body = UpdateMessageRequest,
    responses(
        (status = 200, description = "The full updated message, or null for an unknown id", body = Message),
        (status = 400, description = "Validation error")
    ),
    tag = "messages"
)]
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
    Json(payload): Json<UpdateMessageRequest>,
) -> Result<Json<Option<Message>>> {
    payload.validate()?;

    let message = state
        .message_service
        .update_message(message_id, payload)
        .await?;

    Ok(Json(message))
}

/// Delete a message
#[utoipa::path(
    delete,
    path = "/messages/{message_id}",
    params(
        ("message_id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Deletion confirmation, or a non-existence marker", body = DeleteMessageResponse)
    ),
    tag = "messages"
)]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
) -> Result<Json<DeleteMessageResponse>> {
    let deleted = state.message_service.delete_message(message_id).await?;

    // Clients match on these exact strings.
    if deleted == 0 {
        return Ok(Json(DeleteMessageResponse {
            message: "User does not exist.".to_string(),
            id: None,
        }));
    }

    Ok(Json(DeleteMessageResponse {
        message: "Your message has been deleted!".to_string(),
        id: Some(message_id),
    }))
}
