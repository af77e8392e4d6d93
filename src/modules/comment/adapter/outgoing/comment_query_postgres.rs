use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::comment::application::domain::entities::Comment;
use crate::comment::application::ports::outgoing::{CommentQuery, CommentQueryError};

use super::sea_orm_entity::comments::{Column as CommentColumn, Entity as CommentEntity};

#[derive(Clone, Debug)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, CommentQueryError> {
        let model = CommentEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Comment::from))
    }

    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, CommentQueryError> {
        let models = CommentEntity::find()
            .filter(CommentColumn::PostId.eq(post_id))
            .order_by_asc(CommentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(Comment::from).collect())
    }
}
