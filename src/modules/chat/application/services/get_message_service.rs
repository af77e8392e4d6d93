use async_trait::async_trait;
use uuid::Uuid;

use crate::chat::application::domain::entities::Message;
use crate::chat::application::ports::incoming::use_cases::{GetMessageError, GetMessageUseCase};
use crate::chat::application::ports::outgoing::MessageQuery;

pub struct GetMessageService<Q>
where
    Q: MessageQuery,
{
    query: Q,
}

impl<Q> GetMessageService<Q>
where
    Q: MessageQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMessageUseCase for GetMessageService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(&self, message_id: Uuid) -> Result<Message, GetMessageError> {
        self.query
            .find_by_id(message_id)
            .await
            .map_err(|e| GetMessageError::QueryError(e.to_string()))?
            .ok_or(GetMessageError::NotFound)
    }
}
