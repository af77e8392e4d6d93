use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::incoming::use_cases::{
    AddCommentCommand, AddCommentError, AddCommentUseCase,
};
use crate::comment::application::ports::outgoing::CommentRepository;
use crate::post::application::ports::outgoing::PostQuery;

pub struct AddCommentService<R, P>
where
    R: CommentRepository,
    P: PostQuery,
{
    repository: R,
    posts: P,
}

impl<R, P> AddCommentService<R, P>
where
    R: CommentRepository,
    P: PostQuery,
{
    pub fn new(repository: R, posts: P) -> Self {
        Self { repository, posts }
    }
}

#[async_trait]
impl<R, P> AddCommentUseCase for AddCommentService<R, P>
where
    R: CommentRepository + Send + Sync,
    P: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        author_id: UserId,
        command: AddCommentCommand,
    ) -> Result<Comment, AddCommentError> {
        self.posts
            .find_by_id(post_id)
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?
            .ok_or(AddCommentError::PostNotFound)?;

        let comment = self
            .repository
            .create(post_id, author_id, command.into_content())
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?;

        info!(comment_id = %comment.id, post_id = %post_id, author_id = %author_id, "Comment added");
        Ok(comment)
    }
}
