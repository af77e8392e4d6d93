use async_trait::async_trait;
use uuid::Uuid;

use crate::role::application::domain::entities::Role;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRoleError {
    #[error("Role not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetRoleUseCase: Send + Sync {
    async fn execute(&self, role_id: Uuid) -> Result<Role, GetRoleError>;
}

#[async_trait]
pub trait GetRoleByNameUseCase: Send + Sync {
    async fn execute(&self, name: String) -> Result<Role, GetRoleError>;
}
