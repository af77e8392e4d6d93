use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserResult;

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    password: String,
    first_name: String,
    last_name: Option<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must be between 3 and 50 characters")]
    InvalidUsernameLength,

    #[error("Username may only contain letters, digits, '_', '.' and '-'")]
    InvalidUsernameCharacters,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must not exceed 128 characters")]
    PasswordTooLong,

    #[error("First name must not exceed 100 characters")]
    FirstNameTooLong,

    #[error("Last name must not exceed 100 characters")]
    LastNameTooLong,
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        password: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Self, RegisterUserCommandError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(RegisterUserCommandError::EmptyUsername);
        }

        let len = username.chars().count();
        if !(3..=50).contains(&len) {
            return Err(RegisterUserCommandError::InvalidUsernameLength);
        }

        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '-'))
        {
            return Err(RegisterUserCommandError::InvalidUsernameCharacters);
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegisterUserCommandError::PasswordTooShort);
        }

        if password.chars().count() > MAX_PASSWORD_LENGTH {
            return Err(RegisterUserCommandError::PasswordTooLong);
        }

        // First name falls back to the username when absent or blank
        let first_name = first_name
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| username.to_string());

        if first_name.chars().count() > 100 {
            return Err(RegisterUserCommandError::FirstNameTooLong);
        }

        let last_name = last_name
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        if last_name.as_ref().is_some_and(|l| l.chars().count() > 100) {
            return Err(RegisterUserCommandError::LastNameTooLong);
        }

        Ok(Self {
            username: username.to_string(),
            password,
            first_name,
            last_name,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&String> {
        self.last_name.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserOutput {
    pub user: UserResult,
    pub access_token: String,
    pub refresh_token: String,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisterUserOutput, RegisterUserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(username: &str, password: &str) -> Result<RegisterUserCommand, RegisterUserCommandError> {
        RegisterUserCommand::new(username.to_string(), password.to_string(), None, None)
    }

    #[test]
    fn trims_username_and_defaults_first_name() {
        let command = cmd("  alice  ", "password123").unwrap();

        assert_eq!(command.username(), "alice");
        assert_eq!(command.first_name(), "alice");
        assert!(command.last_name().is_none());
    }

    #[test]
    fn keeps_explicit_names_trimmed() {
        let command = RegisterUserCommand::new(
            "alice".to_string(),
            "password123".to_string(),
            Some("  Alice ".to_string()),
            Some(" Smith".to_string()),
        )
        .unwrap();

        assert_eq!(command.first_name(), "Alice");
        assert_eq!(command.last_name().map(String::as_str), Some("Smith"));
    }

    #[test]
    fn rejects_blank_username() {
        assert_eq!(
            cmd("   ", "password123").unwrap_err(),
            RegisterUserCommandError::EmptyUsername
        );
    }

    #[test]
    fn rejects_short_username() {
        assert_eq!(
            cmd("ab", "password123").unwrap_err(),
            RegisterUserCommandError::InvalidUsernameLength
        );
    }

    #[test]
    fn rejects_username_with_spaces() {
        assert_eq!(
            cmd("al ice", "password123").unwrap_err(),
            RegisterUserCommandError::InvalidUsernameCharacters
        );
    }

    #[test]
    fn rejects_short_password() {
        assert_eq!(
            cmd("alice", "short").unwrap_err(),
            RegisterUserCommandError::PasswordTooShort
        );
    }

    #[test]
    fn rejects_long_password() {
        assert_eq!(
            cmd("alice", &"x".repeat(129)).unwrap_err(),
            RegisterUserCommandError::PasswordTooLong
        );
    }
}
