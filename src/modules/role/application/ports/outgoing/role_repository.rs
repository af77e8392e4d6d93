use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::role::application::domain::entities::{Role, RoleType};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RoleRepositoryError {
    #[error("Role already exists")]
    DuplicateName,

    #[error("Role not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn create(&self, role: RoleType) -> Result<Role, RoleRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RoleRepositoryError>;

    /// Grants the role; granting it twice is a no-op.
    async fn assign(&self, user_id: UserId, role_id: Uuid) -> Result<(), RoleRepositoryError>;

    /// Revokes the role; revoking a role the user lacks is a no-op.
    async fn remove(&self, user_id: UserId, role_id: Uuid) -> Result<(), RoleRepositoryError>;
}
