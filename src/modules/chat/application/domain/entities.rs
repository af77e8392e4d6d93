use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const MAX_MESSAGE_LENGTH: usize = 500;
pub const MIN_GROUP_PARTICIPANTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChatType {
    Private,
    Group,
}

impl ChatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Private => "PRIVATE",
            ChatType::Group => "GROUP",
        }
    }
}

impl fmt::Display for ChatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown chat type: {0}")]
pub struct UnknownChatType(pub String);

impl FromStr for ChatType {
    type Err = UnknownChatType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRIVATE" => Ok(ChatType::Private),
            "GROUP" => Ok(ChatType::Group),
            other => Err(UnknownChatType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chat {
    pub id: Uuid,
    pub chat_type: ChatType,
    pub participant_ids: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Chat {
    pub fn has_participant(&self, user_id: UserId) -> bool {
        self.participant_ids.contains(&user_id)
    }
}

/// Order-independent key of the PRIVATE chat between two users.
pub fn private_pair_key(a: UserId, b: UserId) -> String {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    format!("{}:{}", low, high)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_id: UserId,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_type_parses_exact_names() {
        assert_eq!("PRIVATE".parse::<ChatType>(), Ok(ChatType::Private));
        assert_eq!("GROUP".parse::<ChatType>(), Ok(ChatType::Group));
        assert_eq!(
            "group".parse::<ChatType>(),
            Err(UnknownChatType("group".to_string()))
        );
    }

    #[test]
    fn participant_check() {
        let member = UserId::from(Uuid::new_v4());
        let chat = Chat {
            id: Uuid::new_v4(),
            chat_type: ChatType::Private,
            participant_ids: vec![member, UserId::from(Uuid::new_v4())],
            created_at: Utc::now(),
        };

        assert!(chat.has_participant(member));
        assert!(!chat.has_participant(UserId::from(Uuid::new_v4())));
    }

    #[test]
    fn private_pair_key_ignores_argument_order() {
        let a = UserId::from(Uuid::new_v4());
        let b = UserId::from(Uuid::new_v4());

        assert_eq!(private_pair_key(a, b), private_pair_key(b, a));
        assert_ne!(
            private_pair_key(a, b),
            private_pair_key(a, UserId::from(Uuid::new_v4()))
        );
    }

    #[test]
    fn chat_serializes_type_uppercase() {
        let chat = Chat {
            id: Uuid::nil(),
            chat_type: ChatType::Group,
            participant_ids: vec![],
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&chat).unwrap();

        assert_eq!(json["chat_type"], "GROUP");
    }
}
