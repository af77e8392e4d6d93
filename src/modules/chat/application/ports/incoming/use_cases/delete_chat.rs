use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteChatError {
    #[error("Chat not found")]
    NotFound,

    #[error("Only a participant can delete the chat")]
    NotParticipant,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteChatUseCase: Send + Sync {
    async fn execute(&self, chat_id: Uuid, actor_id: UserId) -> Result<(), DeleteChatError>;
}
