use async_trait::async_trait;
use uuid::Uuid;

use crate::role::application::domain::entities::Role;
use crate::role::application::ports::incoming::use_cases::{
    GetRoleByNameUseCase, GetRoleError, GetRoleUseCase,
};
use crate::role::application::ports::outgoing::RoleQuery;

/// Serves lookups by id and by name.
pub struct GetRoleService<Q>
where
    Q: RoleQuery,
{
    query: Q,
}

impl<Q> GetRoleService<Q>
where
    Q: RoleQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRoleUseCase for GetRoleService<Q>
where
    Q: RoleQuery + Send + Sync,
{
    async fn execute(&self, role_id: Uuid) -> Result<Role, GetRoleError> {
        self.query
            .find_by_id(role_id)
            .await
            .map_err(|e| GetRoleError::QueryError(e.to_string()))?
            .ok_or(GetRoleError::NotFound)
    }
}

#[async_trait]
impl<Q> GetRoleByNameUseCase for GetRoleService<Q>
where
    Q: RoleQuery + Send + Sync,
{
    async fn execute(&self, name: String) -> Result<Role, GetRoleError> {
        self.query
            .find_by_name(name.trim().to_string())
            .await
            .map_err(|e| GetRoleError::QueryError(e.to_string()))?
            .ok_or(GetRoleError::NotFound)
    }
}
