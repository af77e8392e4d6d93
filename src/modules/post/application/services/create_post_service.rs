use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::ports::outgoing::CommunityQuery;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, CreatePostUseCase,
};
use crate::post::application::ports::outgoing::PostRepository;

pub struct CreatePostService<R, C>
where
    R: PostRepository,
    C: CommunityQuery,
{
    repository: R,
    communities: C,
}

impl<R, C> CreatePostService<R, C>
where
    R: PostRepository,
    C: CommunityQuery,
{
    pub fn new(repository: R, communities: C) -> Self {
        Self {
            repository,
            communities,
        }
    }
}

#[async_trait]
impl<R, C> CreatePostUseCase for CreatePostService<R, C>
where
    R: PostRepository + Send + Sync,
    C: CommunityQuery + Send + Sync,
{
    async fn execute(
        &self,
        author_id: UserId,
        command: CreatePostCommand,
    ) -> Result<Post, CreatePostError> {
        if let Some(community_id) = command.community_id() {
            let exists = self
                .communities
                .exists(community_id)
                .await
                .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;
            if !exists {
                return Err(CreatePostError::CommunityNotFound);
            }
        }

        let post = self
            .repository
            .create(command.into_new_post(author_id))
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        info!(post_id = %post.id, author_id = %author_id, "Post created");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::post;
    use crate::tests::support::mocks::{MockCommunityQueryMock, MockPostRepositoryMock};
    use uuid::Uuid;

    #[tokio::test]
    async fn creates_standalone_post_without_community_lookup() {
        let author = Uuid::new_v4();

        let mut communities = MockCommunityQueryMock::new();
        communities.expect_exists().never();
        let mut repo = MockPostRepositoryMock::new();
        repo.expect_create()
            .withf(|new| new.content == "hello" && new.community_id.is_none())
            .times(1)
            .returning(move |new| Ok(post(new.author_id.value(), &new.content)));

        let service = CreatePostService::new(repo, communities);
        let command = CreatePostCommand::new("  hello ", None).unwrap();
        let created = service.execute(UserId::from(author), command).await.unwrap();

        assert_eq!(created.author_id.value(), author);
    }

    #[tokio::test]
    async fn unknown_community_is_rejected() {
        let mut communities = MockCommunityQueryMock::new();
        communities.expect_exists().returning(|_| Ok(false));
        let mut repo = MockPostRepositoryMock::new();
        repo.expect_create().never();

        let service = CreatePostService::new(repo, communities);
        let command = CreatePostCommand::new("hello", Some(Uuid::new_v4())).unwrap();
        let result = service
            .execute(UserId::from(Uuid::new_v4()), command)
            .await;

        assert!(matches!(result, Err(CreatePostError::CommunityNotFound)));
    }

    #[tokio::test]
    async fn community_post_keeps_community_id() {
        let community_id = Uuid::new_v4();

        let mut communities = MockCommunityQueryMock::new();
        communities
            .expect_exists()
            .withf(move |id| *id == community_id)
            .returning(|_| Ok(true));
        let mut repo = MockPostRepositoryMock::new();
        repo.expect_create()
            .withf(move |new| new.community_id == Some(community_id))
            .returning(move |new| {
                let mut created = post(new.author_id.value(), &new.content);
                created.community_id = new.community_id;
                Ok(created)
            });

        let service = CreatePostService::new(repo, communities);
        let command = CreatePostCommand::new("hi all", Some(community_id)).unwrap();
        let created = service
            .execute(UserId::from(Uuid::new_v4()), command)
            .await
            .unwrap();

        assert_eq!(created.community_id, Some(community_id));
    }
}
