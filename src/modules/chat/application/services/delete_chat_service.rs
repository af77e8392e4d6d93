use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::ports::incoming::use_cases::{DeleteChatError, DeleteChatUseCase};
use crate::chat::application::ports::outgoing::{ChatQuery, ChatRepository, ChatRepositoryError};

pub struct DeleteChatService<R, Q>
where
    R: ChatRepository,
    Q: ChatQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteChatService<R, Q>
where
    R: ChatRepository,
    Q: ChatQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteChatUseCase for DeleteChatService<R, Q>
where
    R: ChatRepository + Send + Sync,
    Q: ChatQuery + Send + Sync,
{
    async fn execute(&self, chat_id: Uuid, actor_id: UserId) -> Result<(), DeleteChatError> {
        let chat = self
            .query
            .find_by_id(chat_id)
            .await
            .map_err(|e| DeleteChatError::RepositoryError(e.to_string()))?
            .ok_or(DeleteChatError::NotFound)?;

        if !chat.has_participant(actor_id) {
            warn!(chat_id = %chat_id, actor_id = %actor_id, "Non-participant tried to delete chat");
            return Err(DeleteChatError::NotParticipant);
        }

        self.repository.delete(chat_id).await.map_err(|e| match e {
            ChatRepositoryError::NotFound => DeleteChatError::NotFound,
            other => DeleteChatError::RepositoryError(other.to_string()),
        })?;

        info!(chat_id = %chat_id, actor_id = %actor_id, "Chat deleted");
        Ok(())
    }
}
