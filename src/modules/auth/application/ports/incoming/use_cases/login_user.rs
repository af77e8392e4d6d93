use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

impl LoginUserCommand {
    pub fn new(username: String, password: String) -> Self {
        Self {
            username: username.trim().to_string(),
            password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginUserOutput {
    pub user_id: UserId,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserOutput, LoginUserError>;
}
