use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Message;
use crate::chat::application::ports::incoming::use_cases::{
    SendMessageCommand, SendMessageError, SendMessageUseCase,
};
use crate::chat::application::ports::outgoing::{ChatQuery, MessageRepository};

pub struct SendMessageService<R, Q>
where
    R: MessageRepository,
    Q: ChatQuery,
{
    repository: R,
    chats: Q,
}

impl<R, Q> SendMessageService<R, Q>
where
    R: MessageRepository,
    Q: ChatQuery,
{
    pub fn new(repository: R, chats: Q) -> Self {
        Self { repository, chats }
    }
}

#[async_trait]
impl<R, Q> SendMessageUseCase for SendMessageService<R, Q>
where
    R: MessageRepository + Send + Sync,
    Q: ChatQuery + Send + Sync,
{
    async fn execute(
        &self,
        chat_id: Uuid,
        sender_id: UserId,
        command: SendMessageCommand,
    ) -> Result<Message, SendMessageError> {
        let chat = self
            .chats
            .find_by_id(chat_id)
            .await
            .map_err(|e| SendMessageError::RepositoryError(e.to_string()))?
            .ok_or(SendMessageError::ChatNotFound)?;

        if !chat.has_participant(sender_id) {
            warn!(chat_id = %chat_id, sender_id = %sender_id, "Non-participant tried to post message");
            return Err(SendMessageError::NotParticipant);
        }

        let message = self
            .repository
            .create(chat_id, sender_id, command.into_content())
            .await
            .map_err(|e| SendMessageError::RepositoryError(e.to_string()))?;

        info!(message_id = %message.id, chat_id = %chat_id, sender_id = %sender_id, "Message sent");
        Ok(message)
    }
}
