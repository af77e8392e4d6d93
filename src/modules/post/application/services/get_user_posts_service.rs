use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::incoming::use_cases::{
    GetUserPostsError, GetUserPostsUseCase,
};
use crate::post::application::ports::outgoing::PostQuery;
use crate::user::application::ports::outgoing::UserQuery;

pub struct GetUserPostsService<Q, U>
where
    Q: PostQuery,
    U: UserQuery,
{
    query: Q,
    users: U,
}

impl<Q, U> GetUserPostsService<Q, U>
where
    Q: PostQuery,
    U: UserQuery,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

#[async_trait]
impl<Q, U> GetUserPostsUseCase for GetUserPostsService<Q, U>
where
    Q: PostQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, author_id: UserId) -> Result<Vec<Post>, GetUserPostsError> {
        let exists = self
            .users
            .exists(author_id)
            .await
            .map_err(|e| GetUserPostsError::QueryError(e.to_string()))?;
        if !exists {
            return Err(GetUserPostsError::UserNotFound);
        }

        self.query
            .list_by_author(author_id)
            .await
            .map_err(|e| GetUserPostsError::QueryError(e.to_string()))
    }
}
