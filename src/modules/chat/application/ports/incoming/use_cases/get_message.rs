use async_trait::async_trait;
use uuid::Uuid;

use crate::chat::application::domain::entities::Message;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetMessageUseCase: Send + Sync {
    async fn execute(&self, message_id: Uuid) -> Result<Message, GetMessageError>;
}
