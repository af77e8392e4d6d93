use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Chat;

/// The chat for the pair and whether this call created it.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivateChat {
    pub chat: Chat,
    pub created: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePrivateChatError {
    #[error("Cannot create a chat with yourself")]
    SelfChat,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePrivateChatUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> Result<PrivateChat, CreatePrivateChatError>;
}
