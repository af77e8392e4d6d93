use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Message;
use crate::chat::application::ports::incoming::use_cases::{
    GetUserMessagesError, GetUserMessagesUseCase,
};
use crate::chat::application::ports::outgoing::MessageQuery;

pub struct GetUserMessagesService<Q>
where
    Q: MessageQuery,
{
    query: Q,
}

impl<Q> GetUserMessagesService<Q>
where
    Q: MessageQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserMessagesUseCase for GetUserMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<Message>, GetUserMessagesError> {
        self.query
            .list_for_user(user_id)
            .await
            .map_err(|e| GetUserMessagesError::QueryError(e.to_string()))
    }
}
