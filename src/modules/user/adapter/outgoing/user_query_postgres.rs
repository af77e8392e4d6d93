use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::UserId;
use crate::role::adapter::outgoing::sea_orm_entity::roles::{
    Column as RoleColumn, Entity as RoleEntity,
};
use crate::role::adapter::outgoing::sea_orm_entity::user_roles::{
    Column as UserRoleColumn, Entity as UserRoleEntity,
};
use crate::user::application::domain::entities::UserProfile;
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError, UserSearchCriteria};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Role names per user, sorted for stable output.
    async fn load_roles(
        &self,
        user_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<String>>, UserQueryError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = UserRoleEntity::find()
            .filter(UserRoleColumn::UserId.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let mut role_ids: Vec<Uuid> = links.iter().map(|l| l.role_id).collect();
        role_ids.sort();
        role_ids.dedup();

        let role_names: HashMap<Uuid, String> = RoleEntity::find()
            .filter(RoleColumn::Id.is_in(role_ids))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect();

        let mut roles: HashMap<Uuid, Vec<String>> = HashMap::new();
        for link in links {
            if let Some(name) = role_names.get(&link.role_id) {
                roles.entry(link.user_id).or_default().push(name.clone());
            }
        }
        for names in roles.values_mut() {
            names.sort();
        }

        Ok(roles)
    }

    async fn with_roles(&self, models: Vec<UserModel>) -> Result<Vec<UserProfile>, UserQueryError> {
        let ids = models.iter().map(|m| m.id).collect();
        let mut roles = self.load_roles(ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let user_roles = roles.remove(&m.id).unwrap_or_default();
                to_profile(m, user_roles)
            })
            .collect())
    }
}

fn to_profile(model: UserModel, roles: Vec<String>) -> UserProfile {
    UserProfile {
        id: UserId::from(model.id),
        username: model.username,
        first_name: model.first_name,
        last_name: model.last_name,
        age: model.age,
        gender: model.gender.as_deref().and_then(|g| g.parse().ok()),
        roles,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

/// Lower-cased LIKE prefix with `%`, `_` and `\` escaped.
fn prefix_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 1);
    for c in value.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserProfile>, UserQueryError> {
        let model = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        match model {
            Some(model) => Ok(self.with_roles(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_ids(&self, ids: Vec<UserId>) -> Result<Vec<UserProfile>, UserQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = UserEntity::find()
            .filter(UserColumn::Id.is_in(ids.into_iter().map(|id| id.value())))
            .order_by_asc(UserColumn::Username)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        self.with_roles(models).await
    }

    async fn exists(&self, id: UserId) -> Result<bool, UserQueryError> {
        let model = UserEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.is_some())
    }

    async fn search(
        &self,
        criteria: UserSearchCriteria,
    ) -> Result<Vec<UserProfile>, UserQueryError> {
        let mut condition = Condition::all();

        if let Some(first_name) = criteria.first_name.as_deref() {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(UserColumn::FirstName)))
                    .like(prefix_pattern(first_name)),
            );
        }
        if let Some(last_name) = criteria.last_name.as_deref() {
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(UserColumn::LastName)))
                    .like(prefix_pattern(last_name)),
            );
        }
        if let Some(age) = criteria.age {
            condition = condition.add(UserColumn::Age.eq(age));
        }
        if let Some(gender) = criteria.gender {
            condition = condition.add(UserColumn::Gender.eq(gender.as_str()));
        }

        let models = UserEntity::find()
            .filter(condition)
            .order_by_asc(UserColumn::Username)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        self.with_roles(models).await
    }
}
