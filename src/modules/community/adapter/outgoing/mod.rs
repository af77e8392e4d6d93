mod community_query_postgres;
mod community_repository_postgres;
pub mod sea_orm_entity;

pub use community_query_postgres::CommunityQueryPostgres;
pub use community_repository_postgres::CommunityRepositoryPostgres;

use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::community::application::domain::entities::Community;
use sea_orm_entity::communities::Model as CommunityModel;

impl From<CommunityModel> for Community {
    fn from(model: CommunityModel) -> Self {
        Community {
            id: model.id,
            name: model.name,
            description: model.description,
            admin_id: UserId::from(model.admin_id),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
