use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const MAX_COMMENT_LENGTH: usize = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author_id: UserId,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn belongs_to(&self, post_id: Uuid) -> bool {
        self.post_id == post_id
    }
}
