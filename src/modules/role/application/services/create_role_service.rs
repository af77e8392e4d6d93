use async_trait::async_trait;
use tracing::{info, warn};

use crate::role::application::domain::entities::Role;
use crate::role::application::ports::incoming::use_cases::{
    CreateRoleCommand, CreateRoleError, CreateRoleUseCase,
};
use crate::role::application::ports::outgoing::{RoleQuery, RoleRepository, RoleRepositoryError};

pub struct CreateRoleService<R, Q>
where
    R: RoleRepository,
    Q: RoleQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateRoleService<R, Q>
where
    R: RoleRepository,
    Q: RoleQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateRoleUseCase for CreateRoleService<R, Q>
where
    R: RoleRepository + Send + Sync,
    Q: RoleQuery + Send + Sync,
{
    async fn execute(&self, command: CreateRoleCommand) -> Result<Role, CreateRoleError> {
        let role_type = command.role();

        let existing = self
            .query
            .find_by_name(role_type.as_str().to_string())
            .await
            .map_err(|e| CreateRoleError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            warn!(role = %role_type, "Role already exists");
            return Err(CreateRoleError::AlreadyExists);
        }

        let role = self
            .repository
            .create(role_type)
            .await
            .map_err(|e| match e {
                RoleRepositoryError::DuplicateName => CreateRoleError::AlreadyExists,
                other => CreateRoleError::RepositoryError(other.to_string()),
            })?;

        info!(role_id = %role.id, role = %role.name, "Role created");
        Ok(role)
    }
}
