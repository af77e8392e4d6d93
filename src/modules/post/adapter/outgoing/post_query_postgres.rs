use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;
use crate::post::application::ports::outgoing::{PostQuery, PostQueryError};

use super::sea_orm_entity::posts::{Column as PostColumn, Entity as PostEntity};
use super::with_authors;

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn newest_first(&self, select: Select<PostEntity>) -> Result<Vec<Post>, PostQueryError> {
        let models = select
            .order_by_desc(PostColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        with_authors(&*self.db, models)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, PostQueryError> {
        let model = PostEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        let Some(model) = model else {
            return Ok(None);
        };

        let mut posts = with_authors(&*self.db, vec![model])
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;
        Ok(posts.pop())
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostQueryError> {
        self.newest_first(PostEntity::find()).await
    }

    async fn list_by_author(&self, author_id: UserId) -> Result<Vec<Post>, PostQueryError> {
        self.newest_first(PostEntity::find().filter(PostColumn::AuthorId.eq(author_id.value())))
            .await
    }

    async fn list_by_community(&self, community_id: Uuid) -> Result<Vec<Post>, PostQueryError> {
        self.newest_first(PostEntity::find().filter(PostColumn::CommunityId.eq(community_id)))
            .await
    }
}
