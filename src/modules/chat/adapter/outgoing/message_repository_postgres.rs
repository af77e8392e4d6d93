use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Message;
use crate::chat::application::ports::outgoing::{MessageRepository, MessageRepositoryError};

use super::sea_orm_entity::messages::{ActiveModel as MessageActiveModel, Entity as MessageEntity};

#[derive(Clone, Debug)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn create(
        &self,
        chat_id: Uuid,
        sender_id: UserId,
        content: String,
    ) -> Result<Message, MessageRepositoryError> {
        let model = MessageActiveModel {
            id: Set(Uuid::new_v4()),
            chat_id: Set(chat_id),
            sender_id: Set(sender_id.value()),
            content: Set(content),
            sent_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Message::from(model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError> {
        let result = MessageEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::adapter::outgoing::sea_orm_entity::messages::Model as MessageModel;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    #[tokio::test]
    async fn create_returns_stored_message() {
        let chat_id = Uuid::new_v4();
        let sender = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![MessageModel {
                id: Uuid::new_v4(),
                chat_id,
                sender_id: sender,
                content: "hello".to_string(),
                sent_at: Utc::now().fixed_offset(),
            }]])
            .into_connection();

        let repo = MessageRepositoryPostgres::new(Arc::new(db));
        let message = repo
            .create(chat_id, UserId::from(sender), "hello".to_string())
            .await
            .unwrap();

        assert_eq!(message.chat_id, chat_id);
        assert_eq!(message.sender_id.value(), sender);
    }

    #[tokio::test]
    async fn create_maps_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("boom".into()))])
            .into_connection();

        let repo = MessageRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create(Uuid::new_v4(), UserId::from(Uuid::new_v4()), "x".to_string())
            .await;

        assert!(matches!(result, Err(MessageRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn delete_missing_message_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = MessageRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(MessageRepositoryError::NotFound)));
    }
}
