use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::credential_query::{
    CredentialQuery, CredentialQueryError, UserCredentials,
};

use super::sea_orm_entity::users::{Column, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct CredentialQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CredentialQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialQuery for CredentialQueryPostgres {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, CredentialQueryError> {
        let user = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| CredentialQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|model| UserCredentials {
            id: UserId::from(model.id),
            username: model.username,
            password_hash: model.password_hash,
        }))
    }
}
