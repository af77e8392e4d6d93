mod chat_query_postgres;
mod chat_repository_postgres;
mod message_query_postgres;
mod message_repository_postgres;
pub mod sea_orm_entity;

pub use chat_query_postgres::ChatQueryPostgres;
pub use chat_repository_postgres::ChatRepositoryPostgres;
pub use message_query_postgres::MessageQueryPostgres;
pub use message_repository_postgres::MessageRepositoryPostgres;

use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::{Chat, ChatType, Message, UnknownChatType};
use sea_orm_entity::chats::Model as ChatModel;
use sea_orm_entity::messages::Model as MessageModel;

fn chat_from_model(model: ChatModel, participant_ids: Vec<UserId>) -> Result<Chat, UnknownChatType> {
    Ok(Chat {
        id: model.id,
        chat_type: model.chat_type.parse::<ChatType>()?,
        participant_ids,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            chat_id: model.chat_id,
            sender_id: UserId::from(model.sender_id),
            content: model.content,
            sent_at: model.sent_at.with_timezone(&Utc),
        }
    }
}
