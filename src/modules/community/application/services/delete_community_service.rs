use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::ports::incoming::use_cases::{
    DeleteCommunityError, DeleteCommunityUseCase,
};
use crate::community::application::ports::outgoing::{
    CommunityQuery, CommunityRepository, CommunityRepositoryError,
};

pub struct DeleteCommunityService<R, Q>
where
    R: CommunityRepository,
    Q: CommunityQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteCommunityService<R, Q>
where
    R: CommunityRepository,
    Q: CommunityQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteCommunityUseCase for DeleteCommunityService<R, Q>
where
    R: CommunityRepository + Send + Sync,
    Q: CommunityQuery + Send + Sync,
{
    async fn execute(
        &self,
        community_id: Uuid,
        actor_id: UserId,
    ) -> Result<(), DeleteCommunityError> {
        let community = self
            .query
            .find_by_id(community_id)
            .await
            .map_err(|e| DeleteCommunityError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommunityError::NotFound)?;

        if !community.is_admin(actor_id) {
            warn!(community_id = %community_id, actor_id = %actor_id, "Non-admin tried to delete community");
            return Err(DeleteCommunityError::NotAdmin);
        }

        self.repository
            .delete(community_id)
            .await
            .map_err(|e| match e {
                CommunityRepositoryError::NotFound => DeleteCommunityError::NotFound,
                other => DeleteCommunityError::RepositoryError(other.to_string()),
            })?;

        info!(community_id = %community_id, "Community deleted");
        Ok(())
    }
}
