use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommunityError {
    #[error("Community not found")]
    NotFound,

    #[error("Only the community admin can delete it")]
    NotAdmin,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCommunityUseCase: Send + Sync {
    async fn execute(&self, community_id: Uuid, actor_id: UserId)
        -> Result<(), DeleteCommunityError>;
}
