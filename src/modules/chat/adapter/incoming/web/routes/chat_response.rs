use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::chat::application::domain::entities::{Chat, Message};

#[derive(Serialize, ToSchema)]
pub struct ChatResponse {
    pub id: Uuid,

    /// `PRIVATE` or `GROUP`
    #[schema(example = "PRIVATE")]
    pub chat_type: String,

    pub participant_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id,
            chat_type: chat.chat_type.as_str().to_string(),
            participant_ids: chat.participant_ids.iter().map(|id| id.value()).collect(),
            created_at: chat.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_id: Uuid,

    #[schema(example = "See you tomorrow")]
    pub content: String,

    pub sent_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            chat_id: message.chat_id,
            sender_id: message.sender_id.value(),
            content: message.content,
            sent_at: message.sent_at,
        }
    }
}

pub(super) fn message_list(messages: Vec<Message>) -> Vec<MessageResponse> {
    messages.into_iter().map(MessageResponse::from).collect()
}
