use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveFriendError {
    #[error("Friendship not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveFriendUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, friend_id: UserId) -> Result<(), RemoveFriendError>;
}
