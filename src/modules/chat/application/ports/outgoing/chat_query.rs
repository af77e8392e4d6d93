use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Chat;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ChatQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chat>, ChatQueryError>;

    /// PRIVATE chat whose participant set is exactly `{a, b}`.
    async fn find_private_between(&self, a: UserId, b: UserId)
        -> Result<Option<Chat>, ChatQueryError>;

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Chat>, ChatQueryError>;
}
