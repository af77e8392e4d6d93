use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::role::application::domain::entities::Role;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RoleAssignmentError {
    #[error("User not found")]
    UserNotFound,

    #[error("Role not found")]
    RoleNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AssignRoleUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, role_id: Uuid) -> Result<Role, RoleAssignmentError>;
}

#[async_trait]
pub trait RemoveRoleUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, role_id: Uuid) -> Result<Role, RoleAssignmentError>;
}
