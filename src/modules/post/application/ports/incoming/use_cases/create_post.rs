use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::{normalize_content, Post, PostContentError};
use crate::post::application::ports::outgoing::NewPost;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePostCommand {
    content: String,
    community_id: Option<Uuid>,
}

impl CreatePostCommand {
    pub fn new(content: &str, community_id: Option<Uuid>) -> Result<Self, PostContentError> {
        Ok(Self {
            content: normalize_content(content)?,
            community_id,
        })
    }

    pub fn community_id(&self) -> Option<Uuid> {
        self.community_id
    }

    pub fn into_new_post(self, author_id: UserId) -> NewPost {
        NewPost {
            author_id,
            content: self.content,
            community_id: self.community_id,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Community not found")]
    CommunityNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        author_id: UserId,
        command: CreatePostCommand,
    ) -> Result<Post, CreatePostError>;
}
