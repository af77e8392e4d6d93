use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::Community;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommunityQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommunityQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Community>, CommunityQueryError>;

    async fn exists(&self, id: Uuid) -> Result<bool, CommunityQueryError>;

    /// Newest first.
    async fn list_all(&self) -> Result<Vec<Community>, CommunityQueryError>;

    async fn list_for_member(&self, user_id: UserId)
        -> Result<Vec<Community>, CommunityQueryError>;

    async fn list_member_ids(&self, community_id: Uuid)
        -> Result<Vec<UserId>, CommunityQueryError>;
}
