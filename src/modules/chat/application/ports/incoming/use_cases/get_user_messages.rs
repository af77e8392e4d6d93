use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Message;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserMessagesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetUserMessagesUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<Message>, GetUserMessagesError>;
}
