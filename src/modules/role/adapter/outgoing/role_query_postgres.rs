use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::role::application::domain::entities::Role;
use crate::role::application::ports::outgoing::{RoleQuery, RoleQueryError};

use super::sea_orm_entity::roles::{Column, Entity as RoleEntity, Model as RoleModel};

#[derive(Clone, Debug)]
pub struct RoleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            id: model.id,
            name: model.name,
        }
    }
}

#[async_trait]
impl RoleQuery for RoleQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, RoleQueryError> {
        RoleEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map(|m| m.map(Role::from))
            .map_err(|e| RoleQueryError::DatabaseError(e.to_string()))
    }

    async fn find_by_name(&self, name: String) -> Result<Option<Role>, RoleQueryError> {
        RoleEntity::find()
            .filter(Column::Name.eq(name))
            .one(&*self.db)
            .await
            .map(|m| m.map(Role::from))
            .map_err(|e| RoleQueryError::DatabaseError(e.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Role>, RoleQueryError> {
        RoleEntity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map(|models| models.into_iter().map(Role::from).collect())
            .map_err(|e| RoleQueryError::DatabaseError(e.to_string()))
    }
}
