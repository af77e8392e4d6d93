use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::ChatType;
use crate::chat::application::ports::incoming::use_cases::{
    CreatePrivateChatError, CreatePrivateChatUseCase, PrivateChat,
};
use crate::chat::application::ports::outgoing::{ChatQuery, ChatRepository, ChatRepositoryError};
use crate::user::application::ports::outgoing::UserQuery;

pub struct CreatePrivateChatService<R, Q, U>
where
    R: ChatRepository,
    Q: ChatQuery,
    U: UserQuery,
{
    repository: R,
    query: Q,
    users: U,
}

impl<R, Q, U> CreatePrivateChatService<R, Q, U>
where
    R: ChatRepository,
    Q: ChatQuery,
    U: UserQuery,
{
    pub fn new(repository: R, query: Q, users: U) -> Self {
        Self {
            repository,
            query,
            users,
        }
    }

    async fn existing_between(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> Result<Option<PrivateChat>, CreatePrivateChatError> {
        let chat = self
            .query
            .find_private_between(user_id, other_id)
            .await
            .map_err(|e| CreatePrivateChatError::RepositoryError(e.to_string()))?;

        Ok(chat.map(|chat| PrivateChat {
            chat,
            created: false,
        }))
    }
}

#[async_trait]
impl<R, Q, U> CreatePrivateChatUseCase for CreatePrivateChatService<R, Q, U>
where
    R: ChatRepository + Send + Sync,
    Q: ChatQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> Result<PrivateChat, CreatePrivateChatError> {
        if user_id == other_id {
            warn!(user_id = %user_id, "Rejected private chat with self");
            return Err(CreatePrivateChatError::SelfChat);
        }

        let other_exists = self
            .users
            .exists(other_id)
            .await
            .map_err(|e| CreatePrivateChatError::RepositoryError(e.to_string()))?;
        if !other_exists {
            return Err(CreatePrivateChatError::UserNotFound);
        }

        if let Some(chat) = self.existing_between(user_id, other_id).await? {
            debug!(chat_id = %chat.chat.id, "Reusing existing private chat");
            return Ok(chat);
        }

        let chat = match self
            .repository
            .create(ChatType::Private, vec![user_id, other_id])
            .await
        {
            Ok(chat) => chat,
            Err(ChatRepositoryError::PrivateChatExists) => {
                // Lost the race against a concurrent request for the same pair.
                debug!(user_id = %user_id, other_id = %other_id, "Private chat created concurrently");
                return self
                    .existing_between(user_id, other_id)
                    .await?
                    .ok_or_else(|| {
                        CreatePrivateChatError::RepositoryError(
                            "private chat reported as existing but not found".to_string(),
                        )
                    });
            }
            Err(e) => return Err(CreatePrivateChatError::RepositoryError(e.to_string())),
        };

        info!(chat_id = %chat.id, user_id = %user_id, other_id = %other_id, "Private chat created");
        Ok(PrivateChat {
            chat,
            created: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::chat;
    use crate::chat::application::domain::entities::{private_pair_key, Chat};
    use crate::chat::application::ports::outgoing::ChatQueryError;
    use crate::tests::support::mocks::{
        MockChatQueryMock, MockChatRepositoryMock, MockUserQueryMock,
    };
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::sync::Barrier;
    use uuid::Uuid;

    /// Chat store keyed like `idx_chats_private_pair_key`; rejects a second PRIVATE chat per pair.
    #[derive(Clone, Default)]
    struct InMemoryChats {
        chats: Arc<Mutex<HashMap<String, Chat>>>,
        after_lookup: Arc<Mutex<Option<Arc<Barrier>>>>,
    }

    impl InMemoryChats {
        fn sharing_with_barrier(&self, barrier: Arc<Barrier>) -> Self {
            Self {
                chats: self.chats.clone(),
                after_lookup: Arc::new(Mutex::new(Some(barrier))),
            }
        }

        fn len(&self) -> usize {
            self.chats.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ChatQuery for InMemoryChats {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Chat>, ChatQueryError> {
            let chats = self.chats.lock().unwrap();
            Ok(chats.values().find(|c| c.id == id).cloned())
        }

        async fn find_private_between(
            &self,
            a: UserId,
            b: UserId,
        ) -> Result<Option<Chat>, ChatQueryError> {
            let found = self
                .chats
                .lock()
                .unwrap()
                .get(&private_pair_key(a, b))
                .cloned();

            // Hold the first lookup until the competing request has looked up too.
            let barrier = self.after_lookup.lock().unwrap().take();
            if let Some(barrier) = barrier {
                barrier.wait().await;
            }
            Ok(found)
        }

        async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Chat>, ChatQueryError> {
            let chats = self.chats.lock().unwrap();
            Ok(chats
                .values()
                .filter(|c| c.has_participant(user_id))
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl ChatRepository for InMemoryChats {
        async fn create(
            &self,
            chat_type: ChatType,
            participant_ids: Vec<UserId>,
        ) -> Result<Chat, ChatRepositoryError> {
            let key = private_pair_key(participant_ids[0], participant_ids[1]);
            let mut chats = self.chats.lock().unwrap();
            if chats.contains_key(&key) {
                return Err(ChatRepositoryError::PrivateChatExists);
            }
            let chat = Chat {
                id: Uuid::new_v4(),
                chat_type,
                participant_ids,
                created_at: Utc::now(),
            };
            chats.insert(key, chat.clone());
            Ok(chat)
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ChatRepositoryError> {
            unimplemented!("not used by private chat creation")
        }
    }

    fn existing_users() -> MockUserQueryMock {
        let mut users = MockUserQueryMock::new();
        users.expect_exists().returning(|_| Ok(true));
        users
    }

    #[tokio::test]
    async fn existing_pair_returns_same_chat_without_insert() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let existing = chat(ChatType::Private, &[a, b]);
        let existing_id = existing.id;

        let mut query = MockChatQueryMock::new();
        query
            .expect_find_private_between()
            .returning(move |_, _| Ok(Some(existing.clone())));
        let mut repo = MockChatRepositoryMock::new();
        repo.expect_create().never();

        let service = CreatePrivateChatService::new(repo, query, existing_users());
        let result = service
            .execute(UserId::from(a), UserId::from(b))
            .await
            .unwrap();

        assert!(!result.created);
        assert_eq!(result.chat.id, existing_id);
    }

    #[tokio::test]
    async fn new_pair_creates_private_chat_with_both_participants() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let mut query = MockChatQueryMock::new();
        query.expect_find_private_between().returning(|_, _| Ok(None));
        let mut repo = MockChatRepositoryMock::new();
        repo.expect_create()
            .withf(move |chat_type, ids| {
                *chat_type == ChatType::Private
                    && ids == &vec![UserId::from(a), UserId::from(b)]
            })
            .times(1)
            .returning(move |_, _| Ok(chat(ChatType::Private, &[a, b])));

        let service = CreatePrivateChatService::new(repo, query, existing_users());
        let result = service
            .execute(UserId::from(a), UserId::from(b))
            .await
            .unwrap();

        assert!(result.created);
        assert_eq!(result.chat.participant_ids.len(), 2);
    }

    #[tokio::test]
    async fn insert_conflict_falls_back_to_existing_chat() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let winner = chat(ChatType::Private, &[a, b]);
        let winner_id = winner.id;

        let lookups = Arc::new(AtomicUsize::new(0));
        let counter = lookups.clone();
        let mut query = MockChatQueryMock::new();
        query
            .expect_find_private_between()
            .times(2)
            .returning(move |_, _| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(None)
                } else {
                    Ok(Some(winner.clone()))
                }
            });
        let mut repo = MockChatRepositoryMock::new();
        repo.expect_create()
            .times(1)
            .returning(|_, _| Err(ChatRepositoryError::PrivateChatExists));

        let service = CreatePrivateChatService::new(repo, query, existing_users());
        let result = service
            .execute(UserId::from(a), UserId::from(b))
            .await
            .unwrap();

        assert!(!result.created);
        assert_eq!(result.chat.id, winner_id);
        assert_eq!(lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn reversed_pair_reuses_chat_created_earlier() {
        let a = UserId::from(Uuid::new_v4());
        let b = UserId::from(Uuid::new_v4());
        let store = InMemoryChats::default();
        let service = CreatePrivateChatService::new(store.clone(), store.clone(), existing_users());

        let first = service.execute(a, b).await.unwrap();
        let second = service.execute(b, a).await.unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.chat.id, second.chat.id);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_requests_for_same_pair_yield_one_chat() {
        let a = UserId::from(Uuid::new_v4());
        let b = UserId::from(Uuid::new_v4());
        let store = InMemoryChats::default();
        let barrier = Arc::new(Barrier::new(2));

        let left = store.sharing_with_barrier(barrier.clone());
        let right = store.sharing_with_barrier(barrier);
        let s1 = CreatePrivateChatService::new(left.clone(), left, existing_users());
        let s2 = CreatePrivateChatService::new(right.clone(), right, existing_users());

        let (r1, r2) = tokio::join!(s1.execute(a, b), s2.execute(b, a));
        let (r1, r2) = (r1.unwrap(), r2.unwrap());

        assert_eq!(r1.chat.id, r2.chat.id);
        assert_ne!(r1.created, r2.created, "exactly one request creates the chat");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn chat_with_self_is_rejected() {
        let mut users = MockUserQueryMock::new();
        users.expect_exists().never();
        let service = CreatePrivateChatService::new(
            MockChatRepositoryMock::new(),
            MockChatQueryMock::new(),
            users,
        );

        let me = UserId::from(Uuid::new_v4());
        let result = service.execute(me, me).await;

        assert!(matches!(result, Err(CreatePrivateChatError::SelfChat)));
    }

    #[tokio::test]
    async fn unknown_other_user_is_rejected() {
        let mut users = MockUserQueryMock::new();
        users.expect_exists().returning(|_| Ok(false));
        let mut query = MockChatQueryMock::new();
        query.expect_find_private_between().never();

        let service =
            CreatePrivateChatService::new(MockChatRepositoryMock::new(), query, users);
        let result = service
            .execute(UserId::from(Uuid::new_v4()), UserId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(CreatePrivateChatError::UserNotFound)));
    }
}
