use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::ports::incoming::use_cases::{
    CommunityMembershipError, JoinCommunityUseCase, LeaveCommunityUseCase,
};
use crate::community::application::ports::outgoing::{
    CommunityQuery, CommunityRepository, CommunityRepositoryError,
};

pub struct CommunityMembershipService<R, Q>
where
    R: CommunityRepository,
    Q: CommunityQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CommunityMembershipService<R, Q>
where
    R: CommunityRepository,
    Q: CommunityQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }

    async fn ensure_exists(&self, community_id: Uuid) -> Result<(), CommunityMembershipError> {
        let exists = self
            .query
            .exists(community_id)
            .await
            .map_err(|e| CommunityMembershipError::RepositoryError(e.to_string()))?;

        if !exists {
            return Err(CommunityMembershipError::NotFound);
        }
        Ok(())
    }
}

fn map_repository_error(e: CommunityRepositoryError) -> CommunityMembershipError {
    match e {
        CommunityRepositoryError::NotFound => CommunityMembershipError::NotFound,
        other => CommunityMembershipError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R, Q> JoinCommunityUseCase for CommunityMembershipService<R, Q>
where
    R: CommunityRepository + Send + Sync,
    Q: CommunityQuery + Send + Sync,
{
    async fn execute(
        &self,
        community_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommunityMembershipError> {
        self.ensure_exists(community_id).await?;

        self.repository
            .add_member(community_id, user_id)
            .await
            .map_err(map_repository_error)?;

        info!(community_id = %community_id, user_id = %user_id, "Joined community");
        Ok(())
    }
}

#[async_trait]
impl<R, Q> LeaveCommunityUseCase for CommunityMembershipService<R, Q>
where
    R: CommunityRepository + Send + Sync,
    Q: CommunityQuery + Send + Sync,
{
    async fn execute(
        &self,
        community_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommunityMembershipError> {
        self.ensure_exists(community_id).await?;

        self.repository
            .remove_member(community_id, user_id)
            .await
            .map_err(map_repository_error)?;

        info!(community_id = %community_id, user_id = %user_id, "Left community");
        Ok(())
    }
}
