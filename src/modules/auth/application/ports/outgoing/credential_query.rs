use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

/// Login material for one account. Never leaves the auth module.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CredentialQuery: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, CredentialQueryError>;
}
