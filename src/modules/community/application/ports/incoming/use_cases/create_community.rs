use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::{
    normalize_description, normalize_name, Community, CommunityFieldError,
};
use crate::community::application::ports::outgoing::NewCommunity;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommunityCommand {
    name: String,
    description: Option<String>,
}

impl CreateCommunityCommand {
    pub fn new(name: &str, description: Option<String>) -> Result<Self, CommunityFieldError> {
        Ok(Self {
            name: normalize_name(name)?,
            description: normalize_description(description)?,
        })
    }

    pub fn into_new_community(self, admin_id: UserId) -> NewCommunity {
        NewCommunity {
            name: self.name,
            description: self.description,
            admin_id,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommunityError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCommunityUseCase: Send + Sync {
    async fn execute(
        &self,
        admin_id: UserId,
        command: CreateCommunityCommand,
    ) -> Result<Community, CreateCommunityError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn command_normalizes_fields() {
        let admin = UserId::from(Uuid::new_v4());
        let new = CreateCommunityCommand::new("  rust  ", Some("   ".into()))
            .unwrap()
            .into_new_community(admin);

        assert_eq!(new.name, "rust");
        assert_eq!(new.description, None);
        assert_eq!(new.admin_id, admin);
    }

    #[test]
    fn command_rejects_blank_name() {
        assert_eq!(
            CreateCommunityCommand::new(" ", None),
            Err(CommunityFieldError::NameEmpty)
        );
    }
}
