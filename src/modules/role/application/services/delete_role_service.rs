use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::role::application::ports::incoming::use_cases::{DeleteRoleError, DeleteRoleUseCase};
use crate::role::application::ports::outgoing::{RoleRepository, RoleRepositoryError};

pub struct DeleteRoleService<R>
where
    R: RoleRepository,
{
    repository: R,
}

impl<R> DeleteRoleService<R>
where
    R: RoleRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteRoleUseCase for DeleteRoleService<R>
where
    R: RoleRepository + Send + Sync,
{
    async fn execute(&self, role_id: Uuid) -> Result<(), DeleteRoleError> {
        self.repository
            .delete(role_id)
            .await
            .map_err(|e| match e {
                RoleRepositoryError::NotFound => DeleteRoleError::NotFound,
                other => DeleteRoleError::RepositoryError(other.to_string()),
            })?;

        info!(role_id = %role_id, "Role deleted");
        Ok(())
    }
}
