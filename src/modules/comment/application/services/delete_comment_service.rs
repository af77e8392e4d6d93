use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::ports::incoming::use_cases::{
    DeleteCommentError, DeleteCommentUseCase,
};
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentRepository, CommentRepositoryError,
};

pub struct DeleteCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteCommentUseCase for DeleteCommentService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        actor_id: UserId,
    ) -> Result<(), DeleteCommentError> {
        let comment = self
            .query
            .find_by_id(comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::NotFound)?;

        if !comment.belongs_to(post_id) {
            warn!(comment_id = %comment_id, post_id = %post_id, "Comment addressed through the wrong post");
            return Err(DeleteCommentError::PostMismatch);
        }

        if comment.author_id != actor_id {
            warn!(comment_id = %comment_id, actor_id = %actor_id, "Non-author tried to delete comment");
            return Err(DeleteCommentError::NotAuthor);
        }

        self.repository.delete(comment_id).await.map_err(|e| match e {
            CommentRepositoryError::NotFound => DeleteCommentError::NotFound,
            other => DeleteCommentError::RepositoryError(other.to_string()),
        })?;

        info!(comment_id = %comment_id, post_id = %post_id, "Comment deleted");
        Ok(())
    }
}
