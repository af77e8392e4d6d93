use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::Friendship;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPendingRequestsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetPendingRequestsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<Friendship>, GetPendingRequestsError>;
}
