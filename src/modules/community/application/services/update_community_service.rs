use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::Community;
use crate::community::application::ports::incoming::use_cases::{
    UpdateCommunityCommand, UpdateCommunityError, UpdateCommunityUseCase,
};
use crate::community::application::ports::outgoing::{
    CommunityQuery, CommunityRepository, CommunityRepositoryError,
};

pub struct UpdateCommunityService<R, Q>
where
    R: CommunityRepository,
    Q: CommunityQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateCommunityService<R, Q>
where
    R: CommunityRepository,
    Q: CommunityQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateCommunityUseCase for UpdateCommunityService<R, Q>
where
    R: CommunityRepository + Send + Sync,
    Q: CommunityQuery + Send + Sync,
{
    async fn execute(
        &self,
        community_id: Uuid,
        actor_id: UserId,
        command: UpdateCommunityCommand,
    ) -> Result<Community, UpdateCommunityError> {
        let community = self
            .query
            .find_by_id(community_id)
            .await
            .map_err(|e| UpdateCommunityError::RepositoryError(e.to_string()))?
            .ok_or(UpdateCommunityError::NotFound)?;

        if !community.is_admin(actor_id) {
            warn!(community_id = %community_id, actor_id = %actor_id, "Non-admin tried to update community");
            return Err(UpdateCommunityError::NotAdmin);
        }

        let data = command.into_data();
        if data.name.is_none() && data.description.is_none() {
            return Ok(community);
        }

        let updated = self
            .repository
            .update(community_id, data)
            .await
            .map_err(|e| match e {
                CommunityRepositoryError::NotFound => UpdateCommunityError::NotFound,
                other => UpdateCommunityError::RepositoryError(other.to_string()),
            })?;

        info!(community_id = %community_id, "Community updated");
        Ok(updated)
    }
}
