use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::Community;
use crate::community::application::ports::incoming::use_cases::{
    CreateCommunityCommand, CreateCommunityError, CreateCommunityUseCase,
};
use crate::community::application::ports::outgoing::CommunityRepository;

pub struct CreateCommunityService<R>
where
    R: CommunityRepository,
{
    repository: R,
}

impl<R> CreateCommunityService<R>
where
    R: CommunityRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCommunityUseCase for CreateCommunityService<R>
where
    R: CommunityRepository + Send + Sync,
{
    async fn execute(
        &self,
        admin_id: UserId,
        command: CreateCommunityCommand,
    ) -> Result<Community, CreateCommunityError> {
        let community = self
            .repository
            .create(command.into_new_community(admin_id))
            .await
            .map_err(|e| CreateCommunityError::RepositoryError(e.to_string()))?;

        info!(
            community_id = %community.id,
            admin_id = %admin_id,
            name = %community.name,
            "Community created"
        );
        Ok(community)
    }
}
