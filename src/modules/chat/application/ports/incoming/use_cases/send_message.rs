use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::{Message, MAX_MESSAGE_LENGTH};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageCommand {
    content: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendMessageCommandError {
    #[error("Message content must not be empty")]
    Empty,

    #[error("Message content must not exceed 500 characters")]
    TooLong,
}

impl SendMessageCommand {
    pub fn new(content: &str) -> Result<Self, SendMessageCommandError> {
        let content = content.trim();

        if content.is_empty() {
            return Err(SendMessageCommandError::Empty);
        }
        if content.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(SendMessageCommandError::TooLong);
        }

        Ok(Self {
            content: content.to_string(),
        })
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendMessageError {
    #[error("Chat not found")]
    ChatNotFound,

    #[error("Sender is not a participant of the chat")]
    NotParticipant,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        chat_id: Uuid,
        sender_id: UserId,
        command: SendMessageCommand,
    ) -> Result<Message, SendMessageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_trimmed() {
        let cmd = SendMessageCommand::new("  hello  ").unwrap();
        assert_eq!(cmd.into_content(), "hello");
    }

    #[test]
    fn blank_content_is_rejected() {
        assert_eq!(
            SendMessageCommand::new("   \n"),
            Err(SendMessageCommandError::Empty)
        );
    }

    #[test]
    fn length_limit_counts_characters_after_trim() {
        let exact = "ж".repeat(MAX_MESSAGE_LENGTH);
        assert!(SendMessageCommand::new(&format!("  {}  ", exact)).is_ok());

        let over = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        assert_eq!(
            SendMessageCommand::new(&over),
            Err(SendMessageCommandError::TooLong)
        );
    }
}
