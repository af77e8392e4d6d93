use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::role::application::domain::entities::{Role, RoleType};
use crate::role::application::ports::outgoing::{RoleRepository, RoleRepositoryError};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::roles::{ActiveModel as RoleActiveModel, Entity as RoleEntity};
use super::sea_orm_entity::user_roles::{
    ActiveModel as UserRoleActiveModel, Column as UserRoleColumn, Entity as UserRoleEntity,
};

#[derive(Clone, Debug)]
pub struct RoleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for RoleRepositoryPostgres {
    async fn create(&self, role: RoleType) -> Result<Role, RoleRepositoryError> {
        let model = RoleActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(role.as_str().to_string()),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return RoleRepositoryError::DuplicateName;
            }
            RoleRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Role {
            id: model.id,
            name: model.name,
        })
    }

    async fn delete(&self, id: Uuid) -> Result<(), RoleRepositoryError> {
        let result = RoleEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| RoleRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(RoleRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn assign(&self, user_id: UserId, role_id: Uuid) -> Result<(), RoleRepositoryError> {
        UserRoleEntity::insert(UserRoleActiveModel {
            user_id: Set(user_id.value()),
            role_id: Set(role_id),
        })
        .on_conflict(
            OnConflict::columns([UserRoleColumn::UserId, UserRoleColumn::RoleId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&*self.db)
        .await
        .map_err(|e| RoleRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, user_id: UserId, role_id: Uuid) -> Result<(), RoleRepositoryError> {
        UserRoleEntity::delete_many()
            .filter(UserRoleColumn::UserId.eq(user_id.value()))
            .filter(UserRoleColumn::RoleId.eq(role_id))
            .exec(&*self.db)
            .await
            .map_err(|e| RoleRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
