use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::comment::application::ports::incoming::use_cases::GetCommentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::comment_response::CommentResponse;

/// Comments of a post
#[utoipa::path(
    get,
    path = "/api/posts/{id}/comments",
    tag = "comments",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comments, oldest first", body = inline(SuccessResponse<Vec<CommentResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts/{id}/comments")]
pub async fn get_comments_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.comment.list.execute(post_id).await {
        Ok(comments) => ApiResponse::success(
            comments
                .into_iter()
                .map(CommentResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(GetCommentsError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(GetCommentsError::QueryError(e)) => {
            error!(post_id = %post_id, error = %e, "Failed to load comments");
            ApiResponse::internal_error()
        }
    }
}
