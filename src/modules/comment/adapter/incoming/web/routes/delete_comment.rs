use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::comment::application::ports::incoming::use_cases::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    tag = "comments",
    security(("BearerAuth" = [])),
    params(
        ("post_id" = Uuid, Path, description = "Post ID"),
        ("comment_id" = Uuid, Path, description = "Comment ID"),
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "Comment belongs to another post", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/posts/{post_id}/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();

    match data
        .comment
        .delete
        .execute(post_id, comment_id, UserId::from(user.user_id))
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteCommentError::NotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }

        Err(DeleteCommentError::PostMismatch) => ApiResponse::bad_request(
            "COMMENT_POST_MISMATCH",
            "Comment does not belong to this post",
        ),

        Err(DeleteCommentError::NotAuthor) => ApiResponse::forbidden(
            "NOT_COMMENT_AUTHOR",
            "Only the author can delete the comment",
        ),

        Err(DeleteCommentError::RepositoryError(e)) => {
            error!(comment_id = %comment_id, error = %e, "Failed to delete comment");
            ApiResponse::internal_error()
        }
    }
}
