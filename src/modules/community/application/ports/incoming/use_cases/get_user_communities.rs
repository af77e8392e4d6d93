use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::Community;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserCommunitiesError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetUserCommunitiesUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<Community>, GetUserCommunitiesError>;
}
