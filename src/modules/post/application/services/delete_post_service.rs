use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::{DeletePostError, DeletePostUseCase};
use crate::post::application::ports::outgoing::{PostQuery, PostRepository, PostRepositoryError};

pub struct DeletePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeletePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeletePostUseCase for DeletePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid, actor_id: UserId) -> Result<(), DeletePostError> {
        let post = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::NotFound)?;

        if !post.is_author(actor_id) {
            warn!(post_id = %post_id, actor_id = %actor_id, "Non-author tried to delete post");
            return Err(DeletePostError::NotAuthor);
        }

        self.repository.delete(post_id).await.map_err(|e| match e {
            PostRepositoryError::NotFound => DeletePostError::NotFound,
            other => DeletePostError::RepositoryError(other.to_string()),
        })?;

        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }
}
