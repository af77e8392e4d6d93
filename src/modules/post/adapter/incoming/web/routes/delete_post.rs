use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a post
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/posts/{id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data
        .post
        .delete
        .execute(post_id, UserId::from(user.user_id))
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeletePostError::NotFound) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),

        Err(DeletePostError::NotAuthor) => {
            ApiResponse::forbidden("NOT_POST_AUTHOR", "Only the author can delete the post")
        }

        Err(DeletePostError::RepositoryError(e)) => {
            error!(post_id = %post_id, error = %e, "Failed to delete post");
            ApiResponse::internal_error()
        }
    }
}
