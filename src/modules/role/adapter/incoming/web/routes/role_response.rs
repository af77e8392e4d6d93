use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::role::application::domain::entities::Role;

#[derive(Serialize, ToSchema)]
pub struct RoleResponse {
    pub id: Uuid,

    #[schema(example = "ROLE_USER")]
    pub name: String,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
        }
    }
}
