use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::Community;
use crate::community::application::ports::outgoing::{
    CommunityRepository, CommunityRepositoryError, NewCommunity, UpdateCommunityData,
};

use super::sea_orm_entity::communities::{
    ActiveModel as CommunityActiveModel, Entity as CommunityEntity,
};
use super::sea_orm_entity::community_members::{
    ActiveModel as MemberActiveModel, Column as MemberColumn, Entity as MemberEntity,
};

#[derive(Clone, Debug)]
pub struct CommunityRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommunityRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> CommunityRepositoryError {
    CommunityRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommunityRepository for CommunityRepositoryPostgres {
    async fn create(&self, community: NewCommunity) -> Result<Community, CommunityRepositoryError> {
        let now = Utc::now().fixed_offset();
        let txn = self.db.begin().await.map_err(db_error)?;

        let model = CommunityActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(community.name),
            description: Set(community.description),
            admin_id: Set(community.admin_id.value()),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(db_error)?;

        MemberEntity::insert(MemberActiveModel {
            community_id: Set(model.id),
            user_id: Set(community.admin_id.value()),
            joined_at: Set(now),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        Ok(Community::from(model))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateCommunityData,
    ) -> Result<Community, CommunityRepositoryError> {
        let existing = CommunityEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(CommunityRepositoryError::NotFound)?;

        let mut active: CommunityActiveModel = existing.into();
        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(description) = data.description {
            active.description = Set(Some(description));
        }

        let updated = active.update(&*self.db).await.map_err(db_error)?;
        Ok(Community::from(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CommunityRepositoryError> {
        let result = CommunityEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(CommunityRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn add_member(
        &self,
        community_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommunityRepositoryError> {
        MemberEntity::insert(MemberActiveModel {
            community_id: Set(community_id),
            user_id: Set(user_id.value()),
            joined_at: Set(Utc::now().fixed_offset()),
        })
        .on_conflict(
            OnConflict::columns([MemberColumn::CommunityId, MemberColumn::UserId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&*self.db)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn remove_member(
        &self,
        community_id: Uuid,
        user_id: UserId,
    ) -> Result<(), CommunityRepositoryError> {
        MemberEntity::delete_many()
            .filter(MemberColumn::CommunityId.eq(community_id))
            .filter(MemberColumn::UserId.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
