use async_trait::async_trait;

use crate::role::application::domain::entities::Role;
use crate::role::application::ports::incoming::use_cases::{ListRolesError, ListRolesUseCase};
use crate::role::application::ports::outgoing::RoleQuery;

pub struct ListRolesService<Q>
where
    Q: RoleQuery,
{
    query: Q,
}

impl<Q> ListRolesService<Q>
where
    Q: RoleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListRolesUseCase for ListRolesService<Q>
where
    Q: RoleQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Role>, ListRolesError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListRolesError::QueryError(e.to_string()))
    }
}
