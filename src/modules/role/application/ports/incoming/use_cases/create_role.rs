use async_trait::async_trait;

use crate::role::application::domain::entities::{Role, RoleType, UnknownRole};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoleCommand {
    role: RoleType,
}

impl CreateRoleCommand {
    pub fn new(name: &str) -> Result<Self, UnknownRole> {
        Ok(Self { role: name.parse()? })
    }

    pub fn role(&self) -> RoleType {
        self.role
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateRoleError {
    #[error("Role already exists")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateRoleUseCase: Send + Sync {
    async fn execute(&self, command: CreateRoleCommand) -> Result<Role, CreateRoleError>;
}
