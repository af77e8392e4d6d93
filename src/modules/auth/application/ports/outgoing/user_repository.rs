use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

// Input DTO for creating an account
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

// Account as persisted, including the roles granted at creation
#[derive(Debug, Clone)]
pub struct UserResult {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Default role {0} is missing")]
    DefaultRoleMissing(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the account and links it to the default role in one transaction.
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;
}
