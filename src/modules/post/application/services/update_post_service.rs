use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{
    UpdatePostCommand, UpdatePostError, UpdatePostUseCase,
};
use crate::post::application::ports::outgoing::{PostQuery, PostRepository, PostRepositoryError};

pub struct UpdatePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdatePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdatePostUseCase for UpdatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        actor_id: UserId,
        command: UpdatePostCommand,
    ) -> Result<Post, UpdatePostError> {
        let post = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePostError::NotFound)?;

        if !post.is_author(actor_id) {
            warn!(post_id = %post_id, actor_id = %actor_id, "Non-author tried to edit post");
            return Err(UpdatePostError::NotAuthor);
        }

        let updated = self
            .repository
            .update_content(post_id, command.into_content())
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => UpdatePostError::NotFound,
                other => UpdatePostError::RepositoryError(other.to_string()),
            })?;

        info!(post_id = %post_id, "Post updated");
        Ok(updated)
    }
}
