use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::{normalize_content, Post, PostContentError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePostCommand {
    content: String,
}

impl UpdatePostCommand {
    pub fn new(content: &str) -> Result<Self, PostContentError> {
        Ok(Self {
            content: normalize_content(content)?,
        })
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Only the author can edit the post")]
    NotAuthor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        actor_id: UserId,
        command: UpdatePostCommand,
    ) -> Result<Post, UpdatePostError>;
}
