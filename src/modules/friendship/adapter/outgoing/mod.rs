mod friendship_query_postgres;
mod friendship_repository_postgres;
pub mod sea_orm_entity;

pub use friendship_query_postgres::FriendshipQueryPostgres;
pub use friendship_repository_postgres::FriendshipRepositoryPostgres;

use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::{
    Friendship, FriendshipStatus, UnknownFriendshipStatus,
};
use sea_orm_entity::friendships::Model as FriendshipModel;

impl TryFrom<FriendshipModel> for Friendship {
    type Error = UnknownFriendshipStatus;

    fn try_from(model: FriendshipModel) -> Result<Self, Self::Error> {
        Ok(Friendship {
            id: model.id,
            requester_id: UserId::from(model.requester_id),
            receiver_id: UserId::from(model.receiver_id),
            status: model.status.parse::<FriendshipStatus>()?,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}
