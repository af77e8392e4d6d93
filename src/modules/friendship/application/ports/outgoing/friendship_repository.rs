use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::{Friendship, FriendshipStatus};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FriendshipRepositoryError {
    #[error("An active friendship already exists for this pair")]
    AlreadyExists,

    #[error("Friendship not found")]
    NotFound,

    #[error("Friendship is no longer pending (currently {0})")]
    NotPending(FriendshipStatus),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    async fn create_request(
        &self,
        requester_id: UserId,
        receiver_id: UserId,
    ) -> Result<Friendship, FriendshipRepositoryError>;

    /// Moves a PENDING row to `status`. A row that is no longer PENDING is left untouched.
    async fn update_status(
        &self,
        id: Uuid,
        status: FriendshipStatus,
    ) -> Result<Friendship, FriendshipRepositoryError>;

    /// Removes every row for the pair regardless of direction; returns the count removed.
    async fn delete_between(&self, a: UserId, b: UserId) -> Result<u64, FriendshipRepositoryError>;
}
