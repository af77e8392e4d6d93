use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::{Friendship, FriendshipStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RespondFriendRequestError {
    #[error("Friend request not found")]
    NotFound,

    #[error("Only the receiver can respond to a friend request")]
    NotReceiver,

    #[error("Friend request is {0}, not PENDING")]
    InvalidState(FriendshipStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AcceptFriendRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        friendship_id: Uuid,
        actor_id: UserId,
    ) -> Result<Friendship, RespondFriendRequestError>;
}

#[async_trait]
pub trait DeclineFriendRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        friendship_id: Uuid,
        actor_id: UserId,
    ) -> Result<Friendship, RespondFriendRequestError>;
}
