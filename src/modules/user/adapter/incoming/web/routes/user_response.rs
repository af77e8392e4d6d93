use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::user::application::domain::entities::UserProfile;

#[derive(Serialize, ToSchema)]
pub struct UserProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: Option<String>,

    #[schema(example = 30)]
    pub age: Option<i32>,

    /// `MALE` or `FEMALE`
    #[schema(example = "MALE")]
    pub gender: Option<String>,

    #[schema(example = json!(["ROLE_USER"]))]
    pub roles: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            username: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            age: profile.age,
            gender: profile.gender.map(|g| g.as_str().to_string()),
            roles: profile.roles,
            created_at: profile.created_at,
        }
    }
}
