use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::{private_pair_key, Chat, ChatType};
use crate::chat::application::ports::outgoing::{ChatRepository, ChatRepositoryError};
use crate::shared::db::is_unique_violation;

use super::chat_from_model;
use super::sea_orm_entity::chat_participants::{
    ActiveModel as ParticipantActiveModel, Entity as ParticipantEntity,
};
use super::sea_orm_entity::chats::{ActiveModel as ChatActiveModel, Entity as ChatEntity};

#[derive(Clone, Debug)]
pub struct ChatRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ChatRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChatRepository for ChatRepositoryPostgres {
    async fn create(
        &self,
        chat_type: ChatType,
        participant_ids: Vec<UserId>,
    ) -> Result<Chat, ChatRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ChatRepositoryError::DatabaseError(e.to_string()))?;

        let pair_key = match (chat_type, participant_ids.as_slice()) {
            (ChatType::Private, [a, b]) => Some(private_pair_key(*a, *b)),
            _ => None,
        };

        let chat = ChatActiveModel {
            id: Set(Uuid::new_v4()),
            chat_type: Set(chat_type.as_str().to_string()),
            private_pair_key: Set(pair_key),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return ChatRepositoryError::PrivateChatExists;
            }
            ChatRepositoryError::DatabaseError(e.to_string())
        })?;

        let rows = participant_ids.iter().map(|user_id| ParticipantActiveModel {
            chat_id: Set(chat.id),
            user_id: Set(user_id.value()),
        });
        ParticipantEntity::insert_many(rows)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| ChatRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| ChatRepositoryError::DatabaseError(e.to_string()))?;

        chat_from_model(chat, participant_ids)
            .map_err(|e| ChatRepositoryError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ChatRepositoryError> {
        let result = ChatEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ChatRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ChatRepositoryError::NotFound);
        }
        Ok(())
    }
}
