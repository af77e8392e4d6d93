use async_trait::async_trait;

use crate::community::application::domain::entities::Community;
use crate::community::application::ports::incoming::use_cases::{
    GetAllCommunitiesError, GetAllCommunitiesUseCase,
};
use crate::community::application::ports::outgoing::CommunityQuery;

pub struct GetAllCommunitiesService<Q>
where
    Q: CommunityQuery,
{
    query: Q,
}

impl<Q> GetAllCommunitiesService<Q>
where
    Q: CommunityQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAllCommunitiesUseCase for GetAllCommunitiesService<Q>
where
    Q: CommunityQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Community>, GetAllCommunitiesError> {
        self.query
            .list_all()
            .await
            .map_err(|e| GetAllCommunitiesError::QueryError(e.to_string()))
    }
}
