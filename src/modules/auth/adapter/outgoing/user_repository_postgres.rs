use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};
use crate::role::adapter::outgoing::sea_orm_entity::roles::{
    Column as RoleColumn, Entity as RoleEntity,
};
use crate::role::adapter::outgoing::sea_orm_entity::user_roles::{
    ActiveModel as UserRoleActiveModel, Entity as UserRoleEntity,
};
use crate::role::application::domain::entities::RoleType;
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let default_role = RoleType::User.as_str();
        let txn = self.db.begin().await.map_err(db_error)?;

        let role = RoleEntity::find()
            .filter(RoleColumn::Name.eq(default_role))
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or_else(|| UserRepositoryError::DefaultRoleMissing(default_role.to_string()))?;

        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            password_hash: Set(data.password_hash),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            age: Set(None),
            gender: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&txn).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            db_error(e)
        })?;

        UserRoleEntity::insert(UserRoleActiveModel {
            user_id: Set(inserted.id),
            role_id: Set(role.id),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        Ok(UserResult {
            id: UserId::from(inserted.id),
            username: inserted.username,
            first_name: inserted.first_name,
            last_name: inserted.last_name,
            roles: vec![role.name],
            created_at: inserted.created_at.with_timezone(&Utc),
        })
    }
}
