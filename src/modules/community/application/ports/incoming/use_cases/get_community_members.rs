use async_trait::async_trait;
use uuid::Uuid;

use crate::user::application::domain::entities::UserProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommunityMembersError {
    #[error("Community not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCommunityMembersUseCase: Send + Sync {
    async fn execute(
        &self,
        community_id: Uuid,
    ) -> Result<Vec<UserProfile>, GetCommunityMembersError>;
}
