use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::ports::incoming::use_cases::{
    GetFriendsError, GetFriendsUseCase,
};
use crate::friendship::application::ports::outgoing::FriendshipQuery;
use crate::user::application::domain::entities::UserProfile;
use crate::user::application::ports::outgoing::UserQuery;

pub struct GetFriendsService<Q, U>
where
    Q: FriendshipQuery,
    U: UserQuery,
{
    query: Q,
    users: U,
}

impl<Q, U> GetFriendsService<Q, U>
where
    Q: FriendshipQuery,
    U: UserQuery,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

#[async_trait]
impl<Q, U> GetFriendsUseCase for GetFriendsService<Q, U>
where
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<UserProfile>, GetFriendsError> {
        let accepted = self
            .query
            .list_accepted_for(user_id)
            .await
            .map_err(|e| GetFriendsError::QueryError(e.to_string()))?;

        let mut friend_ids: Vec<UserId> =
            accepted.iter().map(|f| f.other_party(user_id)).collect();
        friend_ids.sort();
        friend_ids.dedup();

        if friend_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.users
            .find_by_ids(friend_ids)
            .await
            .map_err(|e| GetFriendsError::QueryError(e.to_string()))
    }
}
