use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::{Chat, ChatType};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatRepositoryError {
    #[error("Chat not found")]
    NotFound,

    #[error("A private chat already exists for this pair")]
    PrivateChatExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Inserts the chat and its participant rows atomically.
    /// A second PRIVATE chat for the same pair fails with `PrivateChatExists`.
    async fn create(
        &self,
        chat_type: ChatType,
        participant_ids: Vec<UserId>,
    ) -> Result<Chat, ChatRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ChatRepositoryError>;
}
