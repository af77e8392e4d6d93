use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteRoleError {
    #[error("Role not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteRoleUseCase: Send + Sync {
    async fn execute(&self, role_id: Uuid) -> Result<(), DeleteRoleError>;
}
