use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Chat;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserChatsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetUserChatsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<Chat>, GetUserChatsError>;
}
