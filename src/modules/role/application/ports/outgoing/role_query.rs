use async_trait::async_trait;
use uuid::Uuid;

use crate::role::application::domain::entities::Role;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RoleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RoleQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, RoleQueryError>;
    async fn find_by_name(&self, name: String) -> Result<Option<Role>, RoleQueryError>;
    async fn list_all(&self) -> Result<Vec<Role>, RoleQueryError>;
}
