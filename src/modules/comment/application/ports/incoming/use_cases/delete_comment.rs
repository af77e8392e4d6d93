use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Comment does not belong to this post")]
    PostMismatch,

    #[error("Only the author can delete the comment")]
    NotAuthor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        actor_id: UserId,
    ) -> Result<(), DeleteCommentError>;
}
