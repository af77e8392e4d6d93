use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Statement,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::{Chat, ChatType};
use crate::chat::application::ports::outgoing::{ChatQuery, ChatQueryError};

use super::chat_from_model;
use super::sea_orm_entity::chat_participants::{
    Column as ParticipantColumn, Entity as ParticipantEntity,
};
use super::sea_orm_entity::chats::{Column as ChatColumn, Entity as ChatEntity, Model as ChatModel};

/// A PRIVATE chat whose participant set is exactly the two given users.
const PRIVATE_CHAT_BETWEEN_SQL: &str = r#"
SELECT c.id, c.chat_type, c.private_pair_key, c.created_at
FROM chats c
JOIN chat_participants p ON p.chat_id = c.id
WHERE c.chat_type = $1
GROUP BY c.id, c.chat_type, c.private_pair_key, c.created_at
HAVING COUNT(*) = 2
   AND BOOL_OR(p.user_id = $2)
   AND BOOL_OR(p.user_id = $3)
ORDER BY c.created_at ASC
LIMIT 1
"#;

#[derive(Clone, Debug)]
pub struct ChatQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ChatQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn participants_by_chat(
        &self,
        chat_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<UserId>>, ChatQueryError> {
        if chat_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = ParticipantEntity::find()
            .filter(ParticipantColumn::ChatId.is_in(chat_ids))
            .all(&*self.db)
            .await
            .map_err(|e| ChatQueryError::DatabaseError(e.to_string()))?;

        let mut by_chat: HashMap<Uuid, Vec<UserId>> = HashMap::new();
        for row in rows {
            by_chat
                .entry(row.chat_id)
                .or_default()
                .push(UserId::from(row.user_id));
        }
        for ids in by_chat.values_mut() {
            ids.sort();
        }

        Ok(by_chat)
    }

    async fn assemble(&self, models: Vec<ChatModel>) -> Result<Vec<Chat>, ChatQueryError> {
        let mut participants = self
            .participants_by_chat(models.iter().map(|m| m.id).collect())
            .await?;

        models
            .into_iter()
            .map(|model| {
                let ids = participants.remove(&model.id).unwrap_or_default();
                chat_from_model(model, ids)
                    .map_err(|e| ChatQueryError::DatabaseError(e.to_string()))
            })
            .collect()
    }

    async fn assemble_one(&self, model: Option<ChatModel>) -> Result<Option<Chat>, ChatQueryError> {
        match model {
            Some(model) => Ok(self.assemble(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ChatQuery for ChatQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chat>, ChatQueryError> {
        let model = ChatEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| ChatQueryError::DatabaseError(e.to_string()))?;

        self.assemble_one(model).await
    }

    async fn find_private_between(
        &self,
        a: UserId,
        b: UserId,
    ) -> Result<Option<Chat>, ChatQueryError> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let model = ChatEntity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                PRIVATE_CHAT_BETWEEN_SQL,
                [
                    ChatType::Private.as_str().into(),
                    low.value().into(),
                    high.value().into(),
                ],
            ))
            .one(&*self.db)
            .await
            .map_err(|e| ChatQueryError::DatabaseError(e.to_string()))?;

        self.assemble_one(model).await
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Chat>, ChatQueryError> {
        let models = ChatEntity::find()
            .filter(
                ChatColumn::Id.in_subquery(
                    Query::select()
                        .column(ParticipantColumn::ChatId)
                        .from(ParticipantEntity)
                        .and_where(ParticipantColumn::UserId.eq(user_id.value()))
                        .to_owned(),
                ),
            )
            .order_by_desc(ChatColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ChatQueryError::DatabaseError(e.to_string()))?;

        self.assemble(models).await
    }
}
