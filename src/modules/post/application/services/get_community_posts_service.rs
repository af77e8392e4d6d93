use async_trait::async_trait;
use uuid::Uuid;

use crate::community::application::ports::outgoing::CommunityQuery;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{
    GetCommunityPostsError, GetCommunityPostsUseCase,
};
use crate::post::application::ports::outgoing::PostQuery;

pub struct GetCommunityPostsService<Q, C>
where
    Q: PostQuery,
    C: CommunityQuery,
{
    query: Q,
    communities: C,
}

impl<Q, C> GetCommunityPostsService<Q, C>
where
    Q: PostQuery,
    C: CommunityQuery,
{
    pub fn new(query: Q, communities: C) -> Self {
        Self { query, communities }
    }
}

#[async_trait]
impl<Q, C> GetCommunityPostsUseCase for GetCommunityPostsService<Q, C>
where
    Q: PostQuery + Send + Sync,
    C: CommunityQuery + Send + Sync,
{
    async fn execute(&self, community_id: Uuid) -> Result<Vec<Post>, GetCommunityPostsError> {
        let exists = self
            .communities
            .exists(community_id)
            .await
            .map_err(|e| GetCommunityPostsError::QueryError(e.to_string()))?;
        if !exists {
            return Err(GetCommunityPostsError::CommunityNotFound);
        }

        self.query
            .list_by_community(community_id)
            .await
            .map_err(|e| GetCommunityPostsError::QueryError(e.to_string()))
    }
}
