use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::{Friendship, FriendshipStatus};
use crate::friendship::application::ports::outgoing::{
    FriendshipRepository, FriendshipRepositoryError,
};
use crate::shared::db::is_unique_violation;

use super::friendship_query_postgres::pair_condition;
use super::sea_orm_entity::friendships::{
    ActiveModel as FriendshipActiveModel, Column as FriendshipColumn, Entity as FriendshipEntity,
    Model as FriendshipModel,
};

#[derive(Clone, Debug)]
pub struct FriendshipRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FriendshipRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: FriendshipModel) -> Result<Friendship, FriendshipRepositoryError> {
    Friendship::try_from(model).map_err(|e| FriendshipRepositoryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl FriendshipRepository for FriendshipRepositoryPostgres {
    async fn create_request(
        &self,
        requester_id: UserId,
        receiver_id: UserId,
    ) -> Result<Friendship, FriendshipRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = FriendshipActiveModel {
            id: Set(Uuid::new_v4()),
            requester_id: Set(requester_id.value()),
            receiver_id: Set(receiver_id.value()),
            status: Set(FriendshipStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return FriendshipRepositoryError::AlreadyExists;
            }
            FriendshipRepositoryError::DatabaseError(e.to_string())
        })?;

        to_domain(model)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: FriendshipStatus,
    ) -> Result<Friendship, FriendshipRepositoryError> {
        // Guarded on PENDING: of two concurrent answers only one matches a row.
        let updated = FriendshipEntity::update_many()
            .col_expr(FriendshipColumn::Status, Expr::value(status.as_str()))
            .col_expr(
                FriendshipColumn::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(FriendshipColumn::Id.eq(id))
            .filter(FriendshipColumn::Status.eq(FriendshipStatus::Pending.as_str()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| FriendshipRepositoryError::DatabaseError(e.to_string()))?;

        if let Some(model) = updated.into_iter().next() {
            return to_domain(model);
        }

        let current = FriendshipEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| FriendshipRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(FriendshipRepositoryError::NotFound)?;

        Err(FriendshipRepositoryError::NotPending(to_domain(current)?.status))
    }

    async fn delete_between(&self, a: UserId, b: UserId) -> Result<u64, FriendshipRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| FriendshipRepositoryError::DatabaseError(e.to_string()))?;

        let result = FriendshipEntity::delete_many()
            .filter(pair_condition(a, b))
            .exec(&txn)
            .await
            .map_err(|e| FriendshipRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| FriendshipRepositoryError::DatabaseError(e.to_string()))?;

        debug!(rows = result.rows_affected, "Deleted friendship rows");
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, Value};

    fn model(status: &str) -> FriendshipModel {
        let now = Utc::now().fixed_offset();
        FriendshipModel {
            id: Uuid::new_v4(),
            requester_id: Uuid::new_v4(),
            receiver_id: Uuid::new_v4(),
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_request_inserts_pending_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("PENDING")]])
            .into_connection();

        let repo = FriendshipRepositoryPostgres::new(Arc::new(db));
        let created = repo
            .create_request(UserId::from(Uuid::new_v4()), UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(created.status, FriendshipStatus::Pending);
    }

    #[tokio::test]
    async fn create_request_maps_active_pair_violation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"idx_friendships_active_pair\""
                    .into(),
            ))])
            .into_connection();

        let repo = FriendshipRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_request(UserId::from(Uuid::new_v4()), UserId::from(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(FriendshipRepositoryError::AlreadyExists)));
    }

    #[tokio::test]
    async fn update_status_only_touches_pending_rows() {
        let existing = model("PENDING");
        let updated = FriendshipModel {
            status: "ACCEPTED".to_string(),
            ..existing.clone()
        };
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![updated]])
                .into_connection(),
        );

        let repo = FriendshipRepositoryPostgres::new(db.clone());
        let result = repo
            .update_status(existing.id, FriendshipStatus::Accepted)
            .await
            .unwrap();

        assert_eq!(result.status, FriendshipStatus::Accepted);

        drop(repo);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        assert_eq!(log.len(), 1, "a single conditional UPDATE, no prior read");
        let statement = &log[0].statements()[0];
        assert!(statement.sql.starts_with(r#"UPDATE "friendships""#));
        assert!(statement.sql.contains(r#""friendships"."id" = $"#));
        assert!(statement.sql.contains(r#""friendships"."status" = $"#));
        assert!(statement.sql.contains("RETURNING"));
        let values = statement.values.as_ref().unwrap();
        assert!(values.0.contains(&Value::from("PENDING")));
    }

    #[tokio::test]
    async fn update_status_on_answered_row_reports_current_status() {
        let answered = model("DECLINED");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<FriendshipModel>::new(), vec![answered.clone()]])
            .into_connection();

        let repo = FriendshipRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_status(answered.id, FriendshipStatus::Accepted)
            .await;

        assert!(matches!(
            result,
            Err(FriendshipRepositoryError::NotPending(FriendshipStatus::Declined))
        ));
    }

    #[tokio::test]
    async fn update_status_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                Vec::<FriendshipModel>::new(),
                Vec::<FriendshipModel>::new(),
            ])
            .into_connection();

        let repo = FriendshipRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_status(Uuid::new_v4(), FriendshipStatus::Declined)
            .await;

        assert!(matches!(result, Err(FriendshipRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_between_reports_rows_in_both_directions() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results(vec![MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 2,
                }])
                .into_connection(),
        );

        let repo = FriendshipRepositoryPostgres::new(db.clone());
        let removed = repo
            .delete_between(UserId::from(Uuid::new_v4()), UserId::from(Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(removed, 2);

        drop(repo);
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let delete = log
            .iter()
            .flat_map(|txn| txn.statements())
            .find(|stmt| stmt.sql.starts_with("DELETE"))
            .unwrap();
        assert!(delete.sql.contains(r#"DELETE FROM "friendships""#));
        assert!(delete.sql.contains(" OR "));
    }
}
