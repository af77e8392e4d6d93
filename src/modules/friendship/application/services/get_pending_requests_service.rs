use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::Friendship;
use crate::friendship::application::ports::incoming::use_cases::{
    GetPendingRequestsError, GetPendingRequestsUseCase,
};
use crate::friendship::application::ports::outgoing::FriendshipQuery;

pub struct GetPendingRequestsService<Q>
where
    Q: FriendshipQuery,
{
    query: Q,
}

impl<Q> GetPendingRequestsService<Q>
where
    Q: FriendshipQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPendingRequestsUseCase for GetPendingRequestsService<Q>
where
    Q: FriendshipQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<Friendship>, GetPendingRequestsError> {
        self.query
            .list_pending_for_receiver(user_id)
            .await
            .map_err(|e| GetPendingRequestsError::QueryError(e.to_string()))
    }
}
