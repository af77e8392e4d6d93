use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{
        RegisterUserCommand, RegisterUserError, RegisterUserOutput, RegisterUserUseCase,
    },
    outgoing::{
        CreateUserData, CredentialQuery, PasswordHasher, TokenProvider, UserRepository,
        UserRepositoryError,
    },
};

pub struct RegisterUserService<Q, R>
where
    Q: CredentialQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: CredentialQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: CredentialQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        let existing = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            warn!(username = %command.username(), "Registration rejected: username taken");
            return Err(RegisterUserError::UsernameTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            username: command.username().to_string(),
            password_hash,
            first_name: command.first_name().to_string(),
            last_name: command.last_name().cloned(),
        };

        // A concurrent registration can still win the unique index
        let user = self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => RegisterUserError::UsernameTaken,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id.value())
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id.value())
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(RegisterUserOutput {
            user,
            access_token,
            refresh_token,
        })
    }
}
