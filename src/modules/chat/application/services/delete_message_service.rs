use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase,
};
use crate::chat::application::ports::outgoing::{
    MessageQuery, MessageRepository, MessageRepositoryError,
};

pub struct DeleteMessageService<R, Q>
where
    R: MessageRepository,
    Q: MessageQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteMessageService<R, Q>
where
    R: MessageRepository,
    Q: MessageQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteMessageUseCase for DeleteMessageService<R, Q>
where
    R: MessageRepository + Send + Sync,
    Q: MessageQuery + Send + Sync,
{
    async fn execute(&self, message_id: Uuid, actor_id: UserId) -> Result<(), DeleteMessageError> {
        let message = self
            .query
            .find_by_id(message_id)
            .await
            .map_err(|e| DeleteMessageError::RepositoryError(e.to_string()))?
            .ok_or(DeleteMessageError::NotFound)?;

        if message.sender_id != actor_id {
            warn!(message_id = %message_id, actor_id = %actor_id, "Non-sender tried to delete message");
            return Err(DeleteMessageError::NotSender);
        }

        self.repository
            .delete(message_id)
            .await
            .map_err(|e| match e {
                MessageRepositoryError::NotFound => DeleteMessageError::NotFound,
                other => DeleteMessageError::RepositoryError(other.to_string()),
            })?;

        info!(message_id = %message_id, "Message deleted");
        Ok(())
    }
}
