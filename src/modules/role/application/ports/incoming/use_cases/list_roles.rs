use async_trait::async_trait;

use crate::role::application::domain::entities::Role;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListRolesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListRolesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Role>, ListRolesError>;
}
