use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::{Chat, MIN_GROUP_PARTICIPANTS};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateGroupChatCommand {
    participant_ids: Vec<UserId>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateGroupChatCommandError {
    #[error("A group chat needs at least 2 distinct participants")]
    TooFewParticipants,
}

impl CreateGroupChatCommand {
    /// Duplicates are dropped, first occurrence wins.
    pub fn new(participant_ids: Vec<Uuid>) -> Result<Self, CreateGroupChatCommandError> {
        let mut unique: Vec<UserId> = Vec::with_capacity(participant_ids.len());
        for id in participant_ids.into_iter().map(UserId::from) {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }

        if unique.len() < MIN_GROUP_PARTICIPANTS {
            return Err(CreateGroupChatCommandError::TooFewParticipants);
        }

        Ok(Self {
            participant_ids: unique,
        })
    }

    pub fn participant_ids(&self) -> &[UserId] {
        &self.participant_ids
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateGroupChatError {
    #[error("Fewer than 2 of the given users exist")]
    NotEnoughParticipants,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateGroupChatUseCase: Send + Sync {
    async fn execute(&self, command: CreateGroupChatCommand) -> Result<Chat, CreateGroupChatError>;
}
