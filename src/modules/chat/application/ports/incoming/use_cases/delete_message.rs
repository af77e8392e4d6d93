use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Only the sender can delete the message")]
    NotSender,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteMessageUseCase: Send + Sync {
    async fn execute(&self, message_id: Uuid, actor_id: UserId) -> Result<(), DeleteMessageError>;
}
