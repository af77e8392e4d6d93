use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Chat;
use crate::chat::application::ports::incoming::use_cases::{
    GetUserChatsError, GetUserChatsUseCase,
};
use crate::chat::application::ports::outgoing::ChatQuery;

pub struct GetUserChatsService<Q>
where
    Q: ChatQuery,
{
    query: Q,
}

impl<Q> GetUserChatsService<Q>
where
    Q: ChatQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserChatsUseCase for GetUserChatsService<Q>
where
    Q: ChatQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<Chat>, GetUserChatsError> {
        self.query
            .list_for_user(user_id)
            .await
            .map_err(|e| GetUserChatsError::QueryError(e.to_string()))
    }
}
