use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::{
    is_valid_age, Gender, UserProfile, MAX_NAME_LENGTH,
};
use crate::user::application::ports::outgoing::UpdateProfileData;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfileCommand {
    data: UpdateProfileData,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("First name must not exceed 100 characters")]
    FirstNameTooLong,

    #[error("Last name must not exceed 100 characters")]
    LastNameTooLong,

    #[error("Age must be between 0 and 150")]
    InvalidAge,

    #[error("Gender must be MALE or FEMALE")]
    InvalidGender,
}

/// Blank strings count as "not provided"; everything else is trimmed.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl UpdateProfileCommand {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        age: Option<i32>,
        gender: Option<String>,
    ) -> Result<Self, UpdateProfileCommandError> {
        let first_name = non_blank(first_name);
        if first_name
            .as_ref()
            .is_some_and(|n| n.chars().count() > MAX_NAME_LENGTH)
        {
            return Err(UpdateProfileCommandError::FirstNameTooLong);
        }

        let last_name = non_blank(last_name);
        if last_name
            .as_ref()
            .is_some_and(|n| n.chars().count() > MAX_NAME_LENGTH)
        {
            return Err(UpdateProfileCommandError::LastNameTooLong);
        }

        if age.is_some_and(|a| !is_valid_age(a)) {
            return Err(UpdateProfileCommandError::InvalidAge);
        }

        let gender = match non_blank(gender) {
            Some(g) => Some(
                g.parse::<Gender>()
                    .map_err(|_| UpdateProfileCommandError::InvalidGender)?,
            ),
            None => None,
        };

        Ok(Self {
            data: UpdateProfileData {
                first_name,
                last_name,
                age,
                gender,
            },
        })
    }

    pub fn into_data(self) -> UpdateProfileData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError>;
}
