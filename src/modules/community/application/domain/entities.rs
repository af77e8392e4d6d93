use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const MAX_COMMUNITY_NAME_LENGTH: usize = 20;
pub const MAX_COMMUNITY_DESCRIPTION_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Community {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub admin_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Community {
    pub fn is_admin(&self, user_id: UserId) -> bool {
        self.admin_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommunityFieldError {
    #[error("Community name must not be empty")]
    NameEmpty,

    #[error("Community name must not exceed 20 characters")]
    NameTooLong,

    #[error("Community description must not exceed 500 characters")]
    DescriptionTooLong,
}

/// Trims and length-checks a community name.
pub fn normalize_name(name: &str) -> Result<String, CommunityFieldError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CommunityFieldError::NameEmpty);
    }
    if name.chars().count() > MAX_COMMUNITY_NAME_LENGTH {
        return Err(CommunityFieldError::NameTooLong);
    }
    Ok(name.to_string())
}

/// Blank descriptions collapse to `None`.
pub fn normalize_description(
    description: Option<String>,
) -> Result<Option<String>, CommunityFieldError> {
    let description = description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    if description
        .as_ref()
        .is_some_and(|d| d.chars().count() > MAX_COMMUNITY_DESCRIPTION_LENGTH)
    {
        return Err(CommunityFieldError::DescriptionTooLong);
    }
    Ok(description)
}
