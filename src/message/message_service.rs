use crate::error::{AppError, Result};
use crate::message::message_dto::{CreateMessageRequest, UpdateMessageRequest};
use crate::message::message_models::Message;
use crate::message::message_repository::MessageRepository;
use crate::user::user_repository::UserRepository;
use uuid::Uuid;

/// Service layer composing the message and user repositories into the five
/// message operations.
#[derive(Clone)]
pub struct MessageService {
    repo: MessageRepository,
    user_repo: UserRepository,
}

impl MessageService {
    pub fn new(repo: MessageRepository, user_repo: UserRepository) -> Self {
        Self { repo, user_repo }
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        self.repo.find_all().await
    }

    pub async fn get_message(&self, message_id: Uuid) -> Result<Option<Message>> {
        self.repo.find_by_id(message_id).await
    }

    /// Two-step create: persist the message, then prepend its id to the
    /// author's message list. The steps are not atomic — the message stays
    /// durable even when the author lookup fails, and the request then
    /// reports the missing author instead.
    pub async fn create_message(&self, payload: CreateMessageRequest) -> Result<Message> {
        let message = self
            .repo
            .create(&payload.title, &payload.body, payload.author)
            .await?;

        let mut user = self
            .user_repo
            .find_by_id(message.author)
            .await?
            .ok_or_else(|| AppError::NotFound("Author does not exist".to_string()))?;

        user.messages.insert(0, message.id);
        self.user_repo.save(&user).await?;

        Ok(message)
    }

    /// Apply the partial update, then re-fetch so the caller gets the full
    /// stored entity. An unknown id updates nothing and re-fetches `None`.
    pub async fn update_message(
        &self,
        message_id: Uuid,
        payload: UpdateMessageRequest,
    ) -> Result<Option<Message>> {
        self.repo
            .update(
                message_id,
                payload.title.as_deref(),
                payload.body.as_deref(),
                payload.author,
            )
            .await?;

        self.repo.find_by_id(message_id).await
    }

    /// Returns the number of rows removed; zero means the id matched nothing.
    pub async fn delete_message(&self, message_id: Uuid) -> Result<u64> {
        self.repo.delete(message_id).await
    }
}
