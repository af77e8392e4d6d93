use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Message;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(
        &self,
        chat_id: Uuid,
        sender_id: UserId,
        content: String,
    ) -> Result<Message, MessageRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError>;
}
