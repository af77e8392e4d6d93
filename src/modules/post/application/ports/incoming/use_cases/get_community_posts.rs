use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommunityPostsError {
    #[error("Community not found")]
    CommunityNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCommunityPostsUseCase: Send + Sync {
    async fn execute(&self, community_id: Uuid) -> Result<Vec<Post>, GetCommunityPostsError>;
}
