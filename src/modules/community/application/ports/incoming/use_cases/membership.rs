use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommunityMembershipError {
    #[error("Community not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Joining twice is a no-op.
#[async_trait]
pub trait JoinCommunityUseCase: Send + Sync {
    async fn execute(
        &self,
        community_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommunityMembershipError>;
}

/// Leaving a community one is not a member of is a no-op.
#[async_trait]
pub trait LeaveCommunityUseCase: Send + Sync {
    async fn execute(
        &self,
        community_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommunityMembershipError>;
}
