use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::Friendship;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendFriendRequestError {
    #[error("Cannot send a friend request to yourself")]
    SelfRequest,

    #[error("Receiver not found")]
    ReceiverNotFound,

    #[error("A pending or accepted friendship already exists")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendFriendRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        requester_id: UserId,
        receiver_id: UserId,
    ) -> Result<Friendship, SendFriendRequestError>;
}
