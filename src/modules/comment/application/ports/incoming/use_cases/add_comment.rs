use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::{Comment, MAX_COMMENT_LENGTH};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct AddCommentCommand {
    content: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddCommentCommandError {
    #[error("Comment content must not be empty")]
    Empty,

    #[error("Comment content must not exceed 1000 characters")]
    TooLong,
}

impl AddCommentCommand {
    pub fn new(content: &str) -> Result<Self, AddCommentCommandError> {
        let content = content.trim();

        if content.is_empty() {
            return Err(AddCommentCommandError::Empty);
        }
        if content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(AddCommentCommandError::TooLong);
        }

        Ok(Self {
            content: content.to_string(),
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
pub enum AddCommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        author_id: UserId,
        command: AddCommentCommand,
    ) -> Result<Comment, AddCommentError>;
}
