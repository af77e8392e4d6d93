use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(
        &self,
        post_id: Uuid,
        author_id: UserId,
        content: String,
    ) -> Result<Comment, CommentRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CommentRepositoryError>;
}
