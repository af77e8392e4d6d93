use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::role::application::domain::entities::Role;
use crate::role::application::ports::incoming::use_cases::{AssignRoleUseCase, RoleAssignmentError};
use crate::role::application::ports::outgoing::{RoleQuery, RoleRepository};
use crate::user::application::ports::outgoing::UserQuery;

pub struct AssignRoleService<R, Q, U>
where
    R: RoleRepository,
    Q: RoleQuery,
    U: UserQuery,
{
    repository: R,
    query: Q,
    users: U,
}

impl<R, Q, U> AssignRoleService<R, Q, U>
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

/// Shared precondition of assign and remove: both the user and the role must exist.
pub(super) async fn resolve_target<Q, U>(
    query: &Q,
    users: &U,
    user_id: UserId,
    role_id: Uuid,
) -> Result<Role, RoleAssignmentError>
where
    Q: RoleQuery,
    U: UserQuery,
{
    let user_exists = users
        .exists(user_id)
        .await
        .map_err(|e| RoleAssignmentError::RepositoryError(e.to_string()))?;
    if !user_exists {
        return Err(RoleAssignmentError::UserNotFound);
    }

    query
        .find_by_id(role_id)
        .await
        .map_err(|e| RoleAssignmentError::RepositoryError(e.to_string()))?
        .ok_or(RoleAssignmentError::RoleNotFound)
}

#[async_trait]
impl<R, Q, U> AssignRoleUseCase for AssignRoleService<R, Q, U>
where
    R: RoleRepository + Send + Sync,
    Q: RoleQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId, role_id: Uuid) -> Result<Role, RoleAssignmentError> {
        let role = resolve_target(&self.query, &self.users, user_id, role_id).await?;

        self.repository
            .assign(user_id, role_id)
            .await
            .map_err(|e| RoleAssignmentError::RepositoryError(e.to_string()))?;

        info!(user_id = %user_id, role = %role.name, "Role assigned");
        Ok(role)
    }
}
