use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::role::application::domain::entities::Role;
use crate::role::application::ports::incoming::use_cases::{RemoveRoleUseCase, RoleAssignmentError};
use crate::role::application::ports::outgoing::{RoleQuery, RoleRepository};
use crate::user::application::ports::outgoing::UserQuery;

use super::assign_role_service::resolve_target;

pub struct RemoveRoleService<R, Q, U>
where
    R: RoleRepository,
    Q: RoleQuery,
    U: UserQuery,
{
    repository: R,
    query: Q,
    users: U,
}

impl<R, Q, U> RemoveRoleService<R, Q, U>
where
    R: RoleRepository,
    Q: RoleQuery,
    U: UserQuery,
{
    pub fn new(repository: R, query: Q, users: U) -> Self {
        Self {
            repository,
            query,
            users,
        }
    }
}

#[async_trait]
impl<R, Q, U> RemoveRoleUseCase for RemoveRoleService<R, Q, U>
where
    R: RoleRepository + Send + Sync,
    Q: RoleQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId, role_id: Uuid) -> Result<Role, RoleAssignmentError> {
        let role = resolve_target(&self.query, &self.users, user_id, role_id).await?;

        self.repository
            .remove(user_id, role_id)
            .await
            .map_err(|e| RoleAssignmentError::RepositoryError(e.to_string()))?;

        info!(user_id = %user_id, role = %role.name, "Role removed");
        Ok(role)
    }
}
