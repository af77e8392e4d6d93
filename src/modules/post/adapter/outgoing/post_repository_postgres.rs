use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;
use crate::post::application::ports::outgoing::{NewPost, PostRepository, PostRepositoryError};

use super::sea_orm_entity::posts::{
    ActiveModel as PostActiveModel, Entity as PostEntity, Model as PostModel,
};
use super::with_authors;

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn to_post(&self, model: PostModel) -> Result<Post, PostRepositoryError> {
        with_authors(&*self.db, vec![model])
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?
            .pop()
            .ok_or_else(|| PostRepositoryError::DatabaseError("post row vanished".to_string()))
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create(&self, post: NewPost) -> Result<Post, PostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = PostActiveModel {
            id: Set(Uuid::new_v4()),
            content: Set(post.content),
            author_id: Set(post.author_id.value()),
            community_id: Set(post.community_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        self.to_post(model).await
    }

    async fn update_content(&self, id: Uuid, content: String) -> Result<Post, PostRepositoryError> {
        let existing = PostEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(PostRepositoryError::NotFound)?;

        let mut active: PostActiveModel = existing.into();
        active.content = Set(content);
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        self.to_post(updated).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), PostRepositoryError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }
}
