use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::post::application::domain::entities::Post;

#[derive(Serialize, ToSchema)]
pub struct PostResponse {
    pub id: Uuid,

    #[schema(example = "Hello, world!")]
    pub content: String,

    pub author_id: Uuid,

    #[schema(example = "johndoe")]
    pub author_username: String,

    /// Set when the post was made inside a community
    pub community_id: Option<Uuid>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            content: post.content,
            author_id: post.author_id.value(),
            author_username: post.author_username,
            community_id: post.community_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

pub(super) fn post_list(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(PostResponse::from).collect()
}
