use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::{Friendship, FriendshipStatus};
use crate::friendship::application::ports::incoming::use_cases::{
    AcceptFriendRequestUseCase, DeclineFriendRequestUseCase, RespondFriendRequestError,
};
use crate::friendship::application::ports::outgoing::{
    FriendshipQuery, FriendshipRepository, FriendshipRepositoryError,
};

/// Handles both accept and decline; they differ only in the target status.
pub struct RespondFriendRequestService<R, Q>
where
    R: FriendshipRepository,
    Q: FriendshipQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> RespondFriendRequestService<R, Q>
where
    R: FriendshipRepository + Send + Sync,
    Q: FriendshipQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }

    async fn respond(
        &self,
        friendship_id: Uuid,
        actor_id: UserId,
        target: FriendshipStatus,
    ) -> Result<Friendship, RespondFriendRequestError> {
        let friendship = self
            .query
            .find_by_id(friendship_id)
            .await
            .map_err(|e| RespondFriendRequestError::RepositoryError(e.to_string()))?
            .ok_or(RespondFriendRequestError::NotFound)?;

        if friendship.receiver_id != actor_id {
            warn!(
                friendship_id = %friendship_id,
                actor_id = %actor_id,
                "Non-receiver tried to respond to friend request"
            );
            return Err(RespondFriendRequestError::NotReceiver);
        }

        if friendship.status != FriendshipStatus::Pending {
            return Err(RespondFriendRequestError::InvalidState(friendship.status));
        }

        let updated = self
            .repository
            .update_status(friendship_id, target)
            .await
            .map_err(|e| match e {
                FriendshipRepositoryError::NotFound => RespondFriendRequestError::NotFound,
                FriendshipRepositoryError::NotPending(current) => {
                    warn!(
                        friendship_id = %friendship_id,
                        status = %current,
                        "Friend request answered concurrently"
                    );
                    RespondFriendRequestError::InvalidState(current)
                }
                other => RespondFriendRequestError::RepositoryError(other.to_string()),
            })?;

        info!(friendship_id = %friendship_id, status = %target, "Friend request answered");
        Ok(updated)
    }
}

#[async_trait]
impl<R, Q> AcceptFriendRequestUseCase for RespondFriendRequestService<R, Q>
where
    R: FriendshipRepository + Send + Sync,
    Q: FriendshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        friendship_id: Uuid,
        actor_id: UserId,
    ) -> Result<Friendship, RespondFriendRequestError> {
        self.respond(friendship_id, actor_id, FriendshipStatus::Accepted)
            .await
    }
}

#[async_trait]
impl<R, Q> DeclineFriendRequestUseCase for RespondFriendRequestService<R, Q>
where
    R: FriendshipRepository + Send + Sync,
    Q: FriendshipQuery + Send + Sync,
{
    async fn execute(
        &self,
        friendship_id: Uuid,
        actor_id: UserId,
    ) -> Result<Friendship, RespondFriendRequestError> {
        self.respond(friendship_id, actor_id, FriendshipStatus::Declined)
            .await
    }
}
