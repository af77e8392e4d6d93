use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{LoginUserCommand, LoginUserError, LoginUserOutput, LoginUserUseCase},
    outgoing::{CredentialQuery, PasswordHasher, TokenProvider},
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: CredentialQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: CredentialQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: CredentialQuery + Send + Sync,
{
    async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserOutput, LoginUserError> {
        // 1️⃣ Find account
        let credentials = self
            .query
            .find_by_username(&command.username)
            .await
            .map_err(|e| LoginUserError::QueryError(e.to_string()))?;

        let Some(credentials) = credentials else {
            warn!(username = %command.username, "Login failed: unknown username");
            return Err(LoginUserError::InvalidCredentials);
        };

        // 2️⃣ Verify password
        let is_valid = self
            .password_hasher
            .verify_password(&command.password, &credentials.password_hash)
            .await
            .map_err(|e| LoginUserError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %credentials.id, "Login failed: wrong password");
            return Err(LoginUserError::InvalidCredentials);
        }

        // 3️⃣ Issue tokens
        let access_token = self
            .token_provider
            .generate_access_token(credentials.id.value())
            .map_err(|e| LoginUserError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(credentials.id.value())
            .map_err(|e| LoginUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %credentials.id, "User logged in");

        Ok(LoginUserOutput {
            user_id: credentials.id,
            username: credentials.username,
            access_token,
            refresh_token,
        })
    }
}
