use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::{
    UpdateProfileData, UserProfileRepository, UserProfileRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserProfileRepository for UserProfileRepositoryPostgres {
    async fn update_profile(
        &self,
        id: UserId,
        data: UpdateProfileData,
    ) -> Result<(), UserProfileRepositoryError> {
        let user = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserProfileRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserProfileRepositoryError::NotFound)?;

        let mut active_user: UserActiveModel = user.into();

        if let Some(first_name) = data.first_name {
            active_user.first_name = Set(first_name);
        }
        if let Some(last_name) = data.last_name {
            active_user.last_name = Set(Some(last_name));
        }
        if let Some(age) = data.age {
            active_user.age = Set(Some(age));
        }
        if let Some(gender) = data.gender {
            active_user.gender = Set(Some(gender.as_str().to_string()));
        }
        active_user.updated_at = Set(Utc::now().into());

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
