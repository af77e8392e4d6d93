use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub author_id: UserId,
    pub content: String,
    pub community_id: Option<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, PostRepositoryError>;

    async fn update_content(&self, id: Uuid, content: String) -> Result<Post, PostRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), PostRepositoryError>;
}
