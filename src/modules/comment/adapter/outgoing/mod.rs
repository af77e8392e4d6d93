mod comment_query_postgres;
mod comment_repository_postgres;
pub mod sea_orm_entity;

pub use comment_query_postgres::CommentQueryPostgres;
pub use comment_repository_postgres::CommentRepositoryPostgres;

use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::Comment;
use sea_orm_entity::comments::Model as CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            content: model.content,
            author_id: UserId::from(model.author_id),
            post_id: model.post_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
