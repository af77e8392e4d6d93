use async_trait::async_trait;

use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{GetAllPostsError, GetAllPostsUseCase};
use crate::post::application::ports::outgoing::PostQuery;

pub struct GetAllPostsService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> GetAllPostsService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAllPostsUseCase for GetAllPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Post>, GetAllPostsError> {
        self.query
            .list_all()
            .await
            .map_err(|e| GetAllPostsError::QueryError(e.to_string()))
    }
}
