use async_trait::async_trait;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{GetPostError, GetPostUseCase};
use crate::post::application::ports::outgoing::PostQuery;

pub struct GetPostService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> GetPostService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPostUseCase for GetPostService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<Post, GetPostError> {
        self.query
            .find_by_id(post_id)
            .await
            .map_err(|e| GetPostError::QueryError(e.to_string()))?
            .ok_or(GetPostError::NotFound)
    }
}
