use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::chat::application::domain::entities::{Chat, ChatType, MIN_GROUP_PARTICIPANTS};
use crate::chat::application::ports::incoming::use_cases::{
    CreateGroupChatCommand, CreateGroupChatError, CreateGroupChatUseCase,
};
use crate::chat::application::ports::outgoing::ChatRepository;
use crate::user::application::ports::outgoing::UserQuery;

pub struct CreateGroupChatService<R, U>
where
    R: ChatRepository,
    U: UserQuery,
{
    repository: R,
    users: U,
}

impl<R, U> CreateGroupChatService<R, U>
where
    R: ChatRepository,
    U: UserQuery,
{
    pub fn new(repository: R, users: U) -> Self {
        Self { repository, users }
    }
}

#[async_trait]
impl<R, U> CreateGroupChatUseCase for CreateGroupChatService<R, U>
where
    R: ChatRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, command: CreateGroupChatCommand) -> Result<Chat, CreateGroupChatError> {
        let requested = command.participant_ids();

        let found: Vec<UserId> = self
            .users
            .find_by_ids(requested.to_vec())
            .await
            .map_err(|e| CreateGroupChatError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|profile| profile.id)
            .collect();

        // Unknown ids are dropped silently; request order is kept.
        let participants: Vec<UserId> = requested
            .iter()
            .copied()
            .filter(|id| found.contains(id))
            .collect();

        if participants.len() < MIN_GROUP_PARTICIPANTS {
            warn!(
                requested = requested.len(),
                valid = participants.len(),
                "Not enough existing users for group chat"
            );
            return Err(CreateGroupChatError::NotEnoughParticipants);
        }

        let chat = self
            .repository
            .create(ChatType::Group, participants)
            .await
            .map_err(|e| CreateGroupChatError::RepositoryError(e.to_string()))?;

        info!(chat_id = %chat.id, participants = chat.participant_ids.len(), "Group chat created");
        Ok(chat)
    }
}
