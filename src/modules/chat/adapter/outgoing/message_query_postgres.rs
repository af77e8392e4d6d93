use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::Message;
use crate::chat::application::ports::outgoing::{MessageQuery, MessageQueryError};

use super::sea_orm_entity::chat_participants::{
    Column as ParticipantColumn, Entity as ParticipantEntity,
};
use super::sea_orm_entity::messages::{Column as MessageColumn, Entity as MessageEntity};

#[derive(Clone, Debug)]
pub struct MessageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageQuery for MessageQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, MessageQueryError> {
        let model = MessageEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| MessageQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Message::from))
    }

    async fn list_by_chat(&self, chat_id: Uuid) -> Result<Vec<Message>, MessageQueryError> {
        let models = MessageEntity::find()
            .filter(MessageColumn::ChatId.eq(chat_id))
            .order_by_asc(MessageColumn::SentAt)
            .all(&*self.db)
            .await
            .map_err(|e| MessageQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Message::from).collect())
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Message>, MessageQueryError> {
        let models = MessageEntity::find()
            .filter(
                MessageColumn::ChatId.in_subquery(
                    Query::select()
                        .column(ParticipantColumn::ChatId)
                        .from(ParticipantEntity)
                        .and_where(ParticipantColumn::UserId.eq(user_id.value()))
                        .to_owned(),
                ),
            )
            .order_by_asc(MessageColumn::SentAt)
            .all(&*self.db)
            .await
            .map_err(|e| MessageQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Message::from).collect())
    }
}
