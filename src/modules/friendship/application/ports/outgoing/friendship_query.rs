use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::Friendship;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FriendshipQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FriendshipQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Friendship>, FriendshipQueryError>;

    /// PENDING or ACCEPTED row for the pair, in either direction.
    async fn find_active_between(
        &self,
        a: UserId,
        b: UserId,
    ) -> Result<Option<Friendship>, FriendshipQueryError>;

    async fn list_accepted_for(&self, user_id: UserId)
        -> Result<Vec<Friendship>, FriendshipQueryError>;

    /// Incoming PENDING requests, newest first.
    async fn list_pending_for_receiver(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Friendship>, FriendshipQueryError>;
}
