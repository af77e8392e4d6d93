use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::{
    normalize_description, normalize_name, Community, CommunityFieldError,
};
use crate::community::application::ports::outgoing::UpdateCommunityData;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCommunityCommand {
    data: UpdateCommunityData,
}

impl UpdateCommunityCommand {
    /// Blank values are ignored; the rest are validated like on create.
    pub fn new(
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, CommunityFieldError> {
        let name = match name.filter(|n| !n.trim().is_empty()) {
            Some(n) => Some(normalize_name(&n)?),
            None => None,
        };

        Ok(Self {
            data: UpdateCommunityData {
                name,
                description: normalize_description(description)?,
            },
        })
    }

    pub fn into_data(self) -> UpdateCommunityData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCommunityError {
    #[error("Community not found")]
    NotFound,

    #[error("Only the community admin can update it")]
    NotAdmin,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCommunityUseCase: Send + Sync {
    async fn execute(
        &self,
        community_id: Uuid,
        actor_id: UserId,
        command: UpdateCommunityCommand,
    ) -> Result<Community, UpdateCommunityError>;
}
