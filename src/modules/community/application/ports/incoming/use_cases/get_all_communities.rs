use async_trait::async_trait;

use crate::community::application::domain::entities::Community;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAllCommunitiesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetAllCommunitiesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Community>, GetAllCommunitiesError>;
}
