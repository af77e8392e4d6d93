use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::incoming::use_cases::{
    GetCommentsError, GetCommentsUseCase,
};
use crate::comment::application::ports::outgoing::CommentQuery;
use crate::post::application::ports::outgoing::PostQuery;

pub struct GetCommentsService<Q, P>
where
    Q: CommentQuery,
    P: PostQuery,
{
    query: Q,
    posts: P,
}

impl<Q, P> GetCommentsService<Q, P>
where
    Q: CommentQuery,
    P: PostQuery,
{
    pub fn new(query: Q, posts: P) -> Self {
        Self { query, posts }
    }
}

#[async_trait]
impl<Q, P> GetCommentsUseCase for GetCommentsService<Q, P>
where
    Q: CommentQuery + Send + Sync,
    P: PostQuery + Send + Sync,
{
    async fn execute(&self, post_id: Uuid) -> Result<Vec<Comment>, GetCommentsError> {
        self.posts
            .find_by_id(post_id)
            .await
            .map_err(|e| GetCommentsError::QueryError(e.to_string()))?
            .ok_or(GetCommentsError::PostNotFound)?;

        self.query
            .list_by_post(post_id)
            .await
            .map_err(|e| GetCommentsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{comment, post};
    use crate::tests::support::mocks::{MockCommentQueryMock, MockPostQueryMock};

    #[tokio::test]
    async fn lists_comments_of_existing_post() {
        let existing = post(Uuid::new_v4(), "post");
        let post_id = existing.id;

        let mut posts = MockPostQueryMock::new();
        posts
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        let mut query = MockCommentQueryMock::new();
        query
            .expect_list_by_post()
            .withf(move |id| *id == post_id)
            .returning(move |pid| {
                Ok(vec![
                    comment(pid, Uuid::new_v4(), "first"),
                    comment(pid, Uuid::new_v4(), "second"),
                ])
            });

        let service = GetCommentsService::new(query, posts);
        let comments = service.execute(post_id).await.unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].content, "first");
    }

    #[tokio::test]
    async fn missing_post_is_not_found() {
        let mut posts = MockPostQueryMock::new();
        posts.expect_find_by_id().returning(|_| Ok(None));
        let mut query = MockCommentQueryMock::new();
        query.expect_list_by_post().never();

        let service = GetCommentsService::new(query, posts);
        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetCommentsError::PostNotFound)));
    }
}
