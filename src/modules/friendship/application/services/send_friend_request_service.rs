use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::Friendship;
use crate::friendship::application::ports::incoming::use_cases::{
    SendFriendRequestError, SendFriendRequestUseCase,
};
use crate::friendship::application::ports::outgoing::{
    FriendshipQuery, FriendshipRepository, FriendshipRepositoryError,
};
use crate::user::application::ports::outgoing::UserQuery;

pub struct SendFriendRequestService<R, Q, U>
where
    R: FriendshipRepository,
    Q: FriendshipQuery,
    U: UserQuery,
{
    repository: R,
    query: Q,
    users: U,
}

impl<R, Q, U> SendFriendRequestService<R, Q, U>
where
    R: FriendshipRepository,
    Q: FriendshipQuery,
    U: UserQuery,
{
    pub fn new(repository: R, query: Q, users: U) -> Self {
        Self {
            repository,
            query,
            users,
        }
    }
}

#[async_trait]
impl<R, Q, U> SendFriendRequestUseCase for SendFriendRequestService<R, Q, U>
where
    R: FriendshipRepository + Send + Sync,
    Q: FriendshipQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester_id: UserId,
        receiver_id: UserId,
    ) -> Result<Friendship, SendFriendRequestError> {
        if requester_id == receiver_id {
            warn!(user_id = %requester_id, "Rejected friend request to self");
            return Err(SendFriendRequestError::SelfRequest);
        }

        let receiver_exists = self
            .users
            .exists(receiver_id)
            .await
            .map_err(|e| SendFriendRequestError::RepositoryError(e.to_string()))?;
        if !receiver_exists {
            return Err(SendFriendRequestError::ReceiverNotFound);
        }

        let existing = self
            .query
            .find_active_between(requester_id, receiver_id)
            .await
            .map_err(|e| SendFriendRequestError::RepositoryError(e.to_string()))?;
        if let Some(existing) = existing {
            warn!(
                requester_id = %requester_id,
                receiver_id = %receiver_id,
                status = %existing.status,
                "Friendship already exists"
            );
            return Err(SendFriendRequestError::AlreadyExists);
        }

        // The partial unique index still catches a concurrent duplicate.
        let friendship = self
            .repository
            .create_request(requester_id, receiver_id)
            .await
            .map_err(|e| match e {
                FriendshipRepositoryError::AlreadyExists => SendFriendRequestError::AlreadyExists,
                other => SendFriendRequestError::RepositoryError(other.to_string()),
            })?;

        info!(
            friendship_id = %friendship.id,
            requester_id = %requester_id,
            receiver_id = %receiver_id,
            "Friend request sent"
        );
        Ok(friendship)
    }
}
