use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Message;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MessageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Lists are ordered by `sent_at` ascending.
#[async_trait]
pub trait MessageQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, MessageQueryError>;
    async fn list_by_chat(&self, chat_id: Uuid) -> Result<Vec<Message>, MessageQueryError>;

    /// Messages of every chat the user participates in.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Message>, MessageQueryError>;
}
