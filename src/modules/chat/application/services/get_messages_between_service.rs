use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Message;
use crate::chat::application::ports::incoming::use_cases::{
    GetMessagesBetweenError, GetMessagesBetweenUseCase,
};
use crate::chat::application::ports::outgoing::{ChatQuery, MessageQuery};

pub struct GetMessagesBetweenService<C, M>
where
    C: ChatQuery,
    M: MessageQuery,
{
    chats: C,
    messages: M,
}

impl<C, M> GetMessagesBetweenService<C, M>
where
    C: ChatQuery,
    M: MessageQuery,
{
    pub fn new(chats: C, messages: M) -> Self {
        Self { chats, messages }
    }
}

#[async_trait]
impl<C, M> GetMessagesBetweenUseCase for GetMessagesBetweenService<C, M>
where
    C: ChatQuery + Send + Sync,
    M: MessageQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> Result<Vec<Message>, GetMessagesBetweenError> {
        let chat = self
            .chats
            .find_private_between(user_id, other_id)
            .await
            .map_err(|e| GetMessagesBetweenError::QueryError(e.to_string()))?;

        let Some(chat) = chat else {
            debug!(user_id = %user_id, other_id = %other_id, "No private chat between users");
            return Ok(Vec::new());
        };

        self.messages
            .list_by_chat(chat.id)
            .await
            .map_err(|e| GetMessagesBetweenError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::application::domain::entities::ChatType;
    use crate::tests::support::fixtures::{chat, message};
    use crate::tests::support::mocks::{MockChatQueryMock, MockMessageQueryMock};
    use uuid::Uuid;

    #[tokio::test]
    async fn returns_messages_of_shared_private_chat() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let shared = chat(ChatType::Private, &[a, b]);
        let chat_id = shared.id;

        let mut chats = MockChatQueryMock::new();
        chats
            .expect_find_private_between()
            .returning(move |_, _| Ok(Some(shared.clone())));
        let mut messages = MockMessageQueryMock::new();
        messages
            .expect_list_by_chat()
            .withf(move |id| *id == chat_id)
            .times(1)
            .returning(move |id| Ok(vec![message(id, a, "first"), message(id, b, "second")]));

        let service = GetMessagesBetweenService::new(chats, messages);
        let result = service
            .execute(UserId::from(a), UserId::from(b))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].content, "first");
    }

    #[tokio::test]
    async fn no_shared_chat_yields_empty_list() {
        let mut chats = MockChatQueryMock::new();
        chats.expect_find_private_between().returning(|_, _| Ok(None));
        let mut messages = MockMessageQueryMock::new();
        messages.expect_list_by_chat().never();

        let service = GetMessagesBetweenService::new(chats, messages);
        let result = service
            .execute(UserId::from(Uuid::new_v4()), UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(result.is_empty());
    }
}
