use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every listing is ordered newest first.
#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, PostQueryError>;

    async fn list_all(&self) -> Result<Vec<Post>, PostQueryError>;

    async fn list_by_author(&self, author_id: UserId) -> Result<Vec<Post>, PostQueryError>;

    async fn list_by_community(&self, community_id: Uuid) -> Result<Vec<Post>, PostQueryError>;
}
