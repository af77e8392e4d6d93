use async_trait::async_trait;

use crate::user::application::domain::entities::UserProfile;
use crate::user::application::ports::incoming::use_cases::{
    SearchUsersCommand, SearchUsersError, SearchUsersUseCase,
};
use crate::user::application::ports::outgoing::UserQuery;

pub struct SearchUsersService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> SearchUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SearchUsersUseCase for SearchUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: SearchUsersCommand,
    ) -> Result<Vec<UserProfile>, SearchUsersError> {
        self.query
            .search(command.into_criteria())
            .await
            .map_err(|e| SearchUsersError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::user_profile;
    use crate::tests::support::mocks::MockUserQueryMock;
    use crate::user::application::domain::entities::Gender;
    use uuid::Uuid;

    #[tokio::test]
    async fn passes_criteria_to_query() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_search()
            .withf(|c| c.first_name.as_deref() == Some("Al") && c.gender == Some(Gender::Female))
            .times(1)
            .returning(|_| Ok(vec![user_profile(Uuid::new_v4(), "alice")]));

        let service = SearchUsersService::new(query);
        let command =
            SearchUsersCommand::new(Some(" Al ".into()), None, None, Some("FEMALE".into()))
                .unwrap();

        let found = service.execute(command).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "alice");
    }
}
