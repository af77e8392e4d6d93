use async_trait::async_trait;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::Community;
use crate::community::application::ports::outgoing::{CommunityQuery, CommunityQueryError};

use super::sea_orm_entity::communities::{Column as CommunityColumn, Entity as CommunityEntity};
use super::sea_orm_entity::community_members::{
    Column as MemberColumn, Entity as MemberEntity,
};

#[derive(Clone, Debug)]
pub struct CommunityQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommunityQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommunityQuery for CommunityQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Community>, CommunityQueryError> {
        let model = CommunityEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CommunityQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Community::from))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, CommunityQueryError> {
        let model = CommunityEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CommunityQueryError::DatabaseError(e.to_string()))?;

        Ok(model.is_some())
    }

    async fn list_all(&self) -> Result<Vec<Community>, CommunityQueryError> {
        let models = CommunityEntity::find()
            .order_by_desc(CommunityColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CommunityQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Community::from).collect())
    }

    async fn list_for_member(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Community>, CommunityQueryError> {
        let models = CommunityEntity::find()
            .filter(
                CommunityColumn::Id.in_subquery(
                    Query::select()
                        .column(MemberColumn::CommunityId)
                        .from(MemberEntity)
                        .and_where(MemberColumn::UserId.eq(user_id.value()))
                        .to_owned(),
                ),
            )
            .order_by_asc(CommunityColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| CommunityQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Community::from).collect())
    }

    async fn list_member_ids(
        &self,
        community_id: Uuid,
    ) -> Result<Vec<UserId>, CommunityQueryError> {
        let ids: Vec<Uuid> = MemberEntity::find()
            .select_only()
            .column(MemberColumn::UserId)
            .filter(MemberColumn::CommunityId.eq(community_id))
            .order_by_asc(MemberColumn::JoinedAt)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(|e| CommunityQueryError::DatabaseError(e.to_string()))?;

        Ok(ids.into_iter().map(UserId::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::adapter::outgoing::sea_orm_entity::communities::Model as CommunityModel;
    use chrono::{Duration, Utc};
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
    use std::collections::BTreeMap;

    fn model(name: &str, minutes_ago: i64) -> CommunityModel {
        CommunityModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            admin_id: Uuid::new_v4(),
            created_at: (Utc::now() - Duration::minutes(minutes_ago)).fixed_offset(),
        }
    }

    #[tokio::test]
    async fn list_all_orders_newest_first() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![model("new", 1), model("old", 60)]])
                .into_connection(),
        );

        let query = CommunityQueryPostgres::new(db.clone());
        let result = query.list_all().await.unwrap();
        assert_eq!(result[0].name, "new");

        drop(query);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains(r#"ORDER BY "communities"."created_at" DESC"#));
    }

    #[tokio::test]
    async fn exists_reflects_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("rust", 0)]])
            .append_query_results(vec![Vec::<CommunityModel>::new()])
            .into_connection();

        let query = CommunityQueryPostgres::new(Arc::new(db));
        assert!(query.exists(Uuid::new_v4()).await.unwrap());
        assert!(!query.exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn list_member_ids_maps_rows() {
        let member = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "user_id".to_string(),
                Value::Uuid(Some(Box::new(member))),
            )])]])
            .into_connection();

        let query = CommunityQueryPostgres::new(Arc::new(db));
        let ids = query.list_member_ids(Uuid::new_v4()).await.unwrap();

        assert_eq!(ids, vec![UserId::from(member)]);
    }

    #[tokio::test]
    async fn list_for_member_filters_by_membership() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![model("rust", 5)]])
                .into_connection(),
        );

        let query = CommunityQueryPostgres::new(db.clone());
        let result = query
            .list_for_member(UserId::from(Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(result.len(), 1);

        drop(query);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains("IN (SELECT"));
        assert!(sql.contains(r#"FROM "community_members""#));
    }

    #[tokio::test]
    async fn database_errors_are_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Conn(RuntimeErr::Internal("down".into()))])
            .into_connection();

        let query = CommunityQueryPostgres::new(Arc::new(db));
        let result = query.find_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(CommunityQueryError::DatabaseError(_))));
    }
}
