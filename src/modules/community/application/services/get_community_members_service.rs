use async_trait::async_trait;
use uuid::Uuid;

use crate::community::application::ports::incoming::use_cases::{
    GetCommunityMembersError, GetCommunityMembersUseCase,
};
use crate::community::application::ports::outgoing::CommunityQuery;
use crate::user::application::domain::entities::UserProfile;
use crate::user::application::ports::outgoing::UserQuery;

pub struct GetCommunityMembersService<Q, U>
where
    Q: CommunityQuery,
    U: UserQuery,
{
    query: Q,
    users: U,
}

impl<Q, U> GetCommunityMembersService<Q, U>
where
    Q: CommunityQuery,
    U: UserQuery,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

#[async_trait]
impl<Q, U> GetCommunityMembersUseCase for GetCommunityMembersService<Q, U>
where
    Q: CommunityQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        community_id: Uuid,
    ) -> Result<Vec<UserProfile>, GetCommunityMembersError> {
        let exists = self
            .query
            .exists(community_id)
            .await
            .map_err(|e| GetCommunityMembersError::QueryError(e.to_string()))?;
        if !exists {
            return Err(GetCommunityMembersError::NotFound);
        }

        let member_ids = self
            .query
            .list_member_ids(community_id)
            .await
            .map_err(|e| GetCommunityMembersError::QueryError(e.to_string()))?;

        self.users
            .find_by_ids(member_ids)
            .await
            .map_err(|e| GetCommunityMembersError::QueryError(e.to_string()))
    }
}
