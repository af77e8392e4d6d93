use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::Community;
use crate::community::application::ports::incoming::use_cases::{
    GetUserCommunitiesError, GetUserCommunitiesUseCase,
};
use crate::community::application::ports::outgoing::CommunityQuery;
use crate::user::application::ports::outgoing::UserQuery;

pub struct GetUserCommunitiesService<Q, U>
where
    Q: CommunityQuery,
    U: UserQuery,
{
    query: Q,
    users: U,
}

impl<Q, U> GetUserCommunitiesService<Q, U>
where
    Q: CommunityQuery,
    U: UserQuery,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

#[async_trait]
impl<Q, U> GetUserCommunitiesUseCase for GetUserCommunitiesService<Q, U>
where
    Q: CommunityQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<Community>, GetUserCommunitiesError> {
        let exists = self
            .users
            .exists(user_id)
            .await
            .map_err(|e| GetUserCommunitiesError::QueryError(e.to_string()))?;
        if !exists {
            return Err(GetUserCommunitiesError::UserNotFound);
        }

        self.query
            .list_for_member(user_id)
            .await
            .map_err(|e| GetUserCommunitiesError::QueryError(e.to_string()))
    }
}
