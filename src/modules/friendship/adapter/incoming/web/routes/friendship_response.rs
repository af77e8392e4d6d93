use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::friendship::application::domain::entities::Friendship;

#[derive(Serialize, ToSchema)]
pub struct FriendshipResponse {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub receiver_id: Uuid,

    /// `PENDING`, `ACCEPTED` or `DECLINED`
    #[schema(example = "PENDING")]
    pub status: String,

    pub created_at: DateTime<Utc>,
}

impl From<Friendship> for FriendshipResponse {
    fn from(friendship: Friendship) -> Self {
        Self {
            id: friendship.id,
            requester_id: friendship.requester_id.value(),
            receiver_id: friendship.receiver_id.value(),
            status: friendship.status.as_str().to_string(),
            created_at: friendship.created_at,
        }
    }
}
