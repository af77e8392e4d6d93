use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::Community;

#[derive(Debug, Clone, PartialEq)]
pub struct NewCommunity {
    pub name: String,
    pub description: Option<String>,
    pub admin_id: UserId,
}

/// `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCommunityData {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommunityRepositoryError {
    #[error("Community not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Inserts the community and its admin membership atomically.
    async fn create(&self, community: NewCommunity) -> Result<Community, CommunityRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateCommunityData,
    ) -> Result<Community, CommunityRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CommunityRepositoryError>;

    /// No-op when the user is already a member.
    async fn add_member(
        &self,
        community_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommunityRepositoryError>;

    /// No-op when the user is not a member.
    async fn remove_member(
        &self,
        community_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommunityRepositoryError>;
}
