mod post_query_postgres;
mod post_repository_postgres;
pub mod sea_orm_entity;

pub use post_query_postgres::PostQueryPostgres;
pub use post_repository_postgres::PostRepositoryPostgres;

use chrono::Utc;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;
use sea_orm_entity::posts::Model as PostModel;

/// Resolves author usernames with one extra query and keeps the row order.
async fn with_authors<C>(db: &C, models: Vec<PostModel>) -> Result<Vec<Post>, DbErr>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let mut author_ids: Vec<Uuid> = models.iter().map(|m| m.author_id).collect();
    author_ids.sort();
    author_ids.dedup();

    let usernames: HashMap<Uuid, String> = UserEntity::find()
        .filter(UserColumn::Id.is_in(author_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|user| (user.id, user.username))
        .collect();

    Ok(models
        .into_iter()
        .map(|model| {
            let author_username = usernames.get(&model.author_id).cloned().unwrap_or_default();
            Post {
                id: model.id,
                content: model.content,
                author_id: UserId::from(model.author_id),
                author_username,
                community_id: model.community_id,
                created_at: model.created_at.with_timezone(&Utc),
                updated_at: model.updated_at.with_timezone(&Utc),
            }
        })
        .collect())
}
