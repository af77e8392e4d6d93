use async_trait::async_trait;

use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAllPostsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetAllPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Post>, GetAllPostsError>;
}
