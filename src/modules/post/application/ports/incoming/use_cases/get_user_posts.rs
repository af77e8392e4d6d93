use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserPostsError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetUserPostsUseCase: Send + Sync {
    async fn execute(&self, author_id: UserId) -> Result<Vec<Post>, GetUserPostsError>;
}
