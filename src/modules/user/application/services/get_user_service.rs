use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::UserProfile;
use crate::user::application::ports::incoming::use_cases::{GetUserError, GetUserUseCase};
use crate::user::application::ports::outgoing::UserQuery;

pub struct GetUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, GetUserError> {
        self.query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetUserError::QueryError(e.to_string()))?
            .ok_or(GetUserError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::user_profile;
    use crate::tests::support::mocks::MockUserQueryMock;
    use crate::user::application::ports::outgoing::UserQueryError;
    use uuid::Uuid;

    #[tokio::test]
    async fn returns_profile_when_found() {
        let id = Uuid::new_v4();
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_id()
            .withf(move |uid| uid.value() == id)
            .times(1)
            .returning(move |_| Ok(Some(user_profile(id, "alice"))));

        let service = GetUserService::new(query);
        let profile = service.execute(UserId::from(id)).await.unwrap();

        assert_eq!(profile.username, "alice");
    }

    #[tokio::test]
    async fn maps_missing_user_to_not_found() {
        let mut query = MockUserQueryMock::new();
        query.expect_find_by_id().returning(|_| Ok(None));

        let service = GetUserService::new(query);
        let result = service.execute(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(GetUserError::NotFound)));
    }

    #[tokio::test]
    async fn maps_database_error() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_id()
            .returning(|_| Err(UserQueryError::DatabaseError("db down".into())));

        let service = GetUserService::new(query);
        let result = service.execute(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(GetUserError::QueryError(_))));
    }
}
