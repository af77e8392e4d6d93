use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const MAX_POST_LENGTH: usize = 5000;

/// A post together with its author's username.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub content: String,
    pub author_id: UserId,
    pub author_username: String,
    pub community_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_author(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostContentError {
    #[error("Post content must not be empty")]
    Empty,

    #[error("Post content must not exceed 5000 characters")]
    TooLong,
}

pub fn normalize_content(content: &str) -> Result<String, PostContentError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(PostContentError::Empty);
    }
    if content.chars().count() > MAX_POST_LENGTH {
        return Err(PostContentError::TooLong);
    }
    Ok(content.to_string())
}
