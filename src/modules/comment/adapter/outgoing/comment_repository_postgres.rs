use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::outgoing::{CommentRepository, CommentRepositoryError};

use super::sea_orm_entity::comments::{ActiveModel as CommentActiveModel, Entity as CommentEntity};

#[derive(Clone, Debug)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create(
        &self,
        post_id: Uuid,
        author_id: UserId,
        content: String,
    ) -> Result<Comment, CommentRepositoryError> {
        let model = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            content: Set(content),
            author_id: Set(author_id.value()),
            post_id: Set(post_id),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Comment::from(model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CommentRepositoryError> {
        let result = CommentEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::adapter::outgoing::sea_orm_entity::comments::Model as CommentModel;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    #[tokio::test]
    async fn create_inserts_comment() {
        let post_id = Uuid::new_v4();
        let author = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![CommentModel {
                id: Uuid::new_v4(),
                content: "nice".to_string(),
                author_id: author,
                post_id,
                created_at: Utc::now().fixed_offset(),
            }]])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));
        let comment = repo
            .create(post_id, UserId::from(author), "nice".to_string())
            .await
            .unwrap();

        assert_eq!(comment.author_id.value(), author);
        assert_eq!(comment.post_id, post_id);
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(CommentRepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn database_errors_are_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Conn(RuntimeErr::Internal("down".into()))])
            .into_connection();

        let repo = CommentRepositoryPostgres::new(Arc::new(db));
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(CommentRepositoryError::DatabaseError(_))
        ));
    }
}
