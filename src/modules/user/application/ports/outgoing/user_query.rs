use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::{Gender, UserProfile};

/// Filters combine with AND; names match case-insensitively by prefix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSearchCriteria {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserProfile>, UserQueryError>;

    /// Unknown ids are skipped; the result is ordered by username.
    async fn find_by_ids(&self, ids: Vec<UserId>) -> Result<Vec<UserProfile>, UserQueryError>;

    async fn exists(&self, id: UserId) -> Result<bool, UserQueryError>;

    async fn search(
        &self,
        criteria: UserSearchCriteria,
    ) -> Result<Vec<UserProfile>, UserQueryError>;
}
