use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::{Friendship, FriendshipStatus};
use crate::friendship::application::ports::outgoing::{FriendshipQuery, FriendshipQueryError};

use super::sea_orm_entity::friendships::{
    Column as FriendshipColumn, Entity as FriendshipEntity, Model as FriendshipModel,
};

#[derive(Clone, Debug)]
pub struct FriendshipQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FriendshipQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: FriendshipModel) -> Result<Friendship, FriendshipQueryError> {
    Friendship::try_from(model).map_err(|e| FriendshipQueryError::DatabaseError(e.to_string()))
}

fn to_domain_all(models: Vec<FriendshipModel>) -> Result<Vec<Friendship>, FriendshipQueryError> {
    models.into_iter().map(to_domain).collect()
}

/// Matches rows for the pair in either direction.
pub(super) fn pair_condition(a: UserId, b: UserId) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(FriendshipColumn::RequesterId.eq(a.value()))
                .add(FriendshipColumn::ReceiverId.eq(b.value())),
        )
        .add(
            Condition::all()
                .add(FriendshipColumn::RequesterId.eq(b.value()))
                .add(FriendshipColumn::ReceiverId.eq(a.value())),
        )
}

#[async_trait]
impl FriendshipQuery for FriendshipQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Friendship>, FriendshipQueryError> {
        FriendshipEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| FriendshipQueryError::DatabaseError(e.to_string()))?
            .map(to_domain)
            .transpose()
    }

    async fn find_active_between(
        &self,
        a: UserId,
        b: UserId,
    ) -> Result<Option<Friendship>, FriendshipQueryError> {
        FriendshipEntity::find()
            .filter(pair_condition(a, b))
            .filter(FriendshipColumn::Status.is_in([
                FriendshipStatus::Pending.as_str(),
                FriendshipStatus::Accepted.as_str(),
            ]))
            .one(&*self.db)
            .await
            .map_err(|e| FriendshipQueryError::DatabaseError(e.to_string()))?
            .map(to_domain)
            .transpose()
    }

    async fn list_accepted_for(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Friendship>, FriendshipQueryError> {
        let models = FriendshipEntity::find()
            .filter(
                Condition::any()
                    .add(FriendshipColumn::RequesterId.eq(user_id.value()))
                    .add(FriendshipColumn::ReceiverId.eq(user_id.value())),
            )
            .filter(FriendshipColumn::Status.eq(FriendshipStatus::Accepted.as_str()))
            .order_by_asc(FriendshipColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| FriendshipQueryError::DatabaseError(e.to_string()))?;

        to_domain_all(models)
    }

    async fn list_pending_for_receiver(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Friendship>, FriendshipQueryError> {
        let models = FriendshipEntity::find()
            .filter(FriendshipColumn::ReceiverId.eq(user_id.value()))
            .filter(FriendshipColumn::Status.eq(FriendshipStatus::Pending.as_str()))
            .order_by_desc(FriendshipColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| FriendshipQueryError::DatabaseError(e.to_string()))?;

        to_domain_all(models)
    }
}
