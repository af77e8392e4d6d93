use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::UserProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFriendsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetFriendsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<UserProfile>, GetFriendsError>;
}
