use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Message;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMessagesBetweenError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetMessagesBetweenUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> Result<Vec<Message>, GetMessagesBetweenError>;
}
