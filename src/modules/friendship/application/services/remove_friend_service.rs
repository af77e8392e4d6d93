use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::ports::incoming::use_cases::{
    RemoveFriendError, RemoveFriendUseCase,
};
use crate::friendship::application::ports::outgoing::FriendshipRepository;

pub struct RemoveFriendService<R>
where
    R: FriendshipRepository,
{
    repository: R,
}

impl<R> RemoveFriendService<R>
where
    R: FriendshipRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RemoveFriendUseCase for RemoveFriendService<R>
where
    R: FriendshipRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, friend_id: UserId) -> Result<(), RemoveFriendError> {
        let removed = self
            .repository
            .delete_between(user_id, friend_id)
            .await
            .map_err(|e| RemoveFriendError::RepositoryError(e.to_string()))?;

        if removed == 0 {
            return Err(RemoveFriendError::NotFound);
        }

        info!(user_id = %user_id, friend_id = %friend_id, removed, "Friendship removed");
        Ok(())
    }
}
