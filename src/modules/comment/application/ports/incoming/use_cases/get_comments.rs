use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid) -> Result<Vec<Comment>, GetCommentsError>;
}
