use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::UserProfile;
use crate::user::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::user::application::ports::outgoing::{
    UserProfileRepository, UserProfileRepositoryError, UserQuery,
};

pub struct UpdateProfileService<R, Q>
where
    R: UserProfileRepository,
    Q: UserQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateProfileService<R, Q>
where
    R: UserProfileRepository,
    Q: UserQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateProfileUseCase for UpdateProfileService<R, Q>
where
    R: UserProfileRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        self.repository
            .update_profile(user_id, command.into_data())
            .await
            .map_err(|e| match e {
                UserProfileRepositoryError::NotFound => UpdateProfileError::NotFound,
                UserProfileRepositoryError::DatabaseError(msg) => {
                    UpdateProfileError::RepositoryError(msg)
                }
            })?;

        info!(user_id = %user_id, "Profile updated");

        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::NotFound)
    }
}
