use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::comment::application::domain::entities::Comment;

#[derive(Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,

    #[schema(example = "Nice post!")]
    pub content: String,

    pub author_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            author_id: comment.author_id.value(),
            post_id: comment.post_id,
            created_at: comment.created_at,
        }
    }
}
