use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::Gender;

/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserProfileRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    async fn update_profile(
        &self,
        id: UserId,
        data: UpdateProfileData,
    ) -> Result<(), UserProfileRepositoryError>;
}
