use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPostError {
    #[error("Post not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<Post, GetPostError>;
}
