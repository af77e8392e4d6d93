use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::community::application::domain::entities::Community;

#[derive(Serialize, ToSchema)]
pub struct CommunityResponse {
    pub id: Uuid,

    #[schema(example = "rustaceans")]
    pub name: String,

    #[schema(example = "Everything Rust")]
    pub description: Option<String>,

    pub admin_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Community> for CommunityResponse {
    fn from(community: Community) -> Self {
        Self {
            id: community.id,
            name: community.name,
            description: community.description,
            admin_id: community.admin_id.value(),
            created_at: community.created_at,
        }
    }
}

pub(super) fn community_list(communities: Vec<Community>) -> Vec<CommunityResponse> {
    communities.into_iter().map(CommunityResponse::from).collect()
}
