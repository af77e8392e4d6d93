use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::comment::application::ports::incoming::use_cases::{AddCommentCommand, AddCommentError};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::comment_response::CommentResponse;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddCommentRequest {
    #[schema(example = "Nice post!")]
    pub content: String,
}

/// Comment on a post
#[utoipa::path(
    post,
    path = "/api/posts/{id}/comments",
    tag = "comments",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Post ID")),
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Created comment", body = inline(SuccessResponse<CommentResponse>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/posts/{id}/comments")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match AddCommentCommand::new(&req.content) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("INVALID_COMMENT_CONTENT", &e.to_string()),
    };
    let post_id = path.into_inner();

    match data
        .comment
        .add
        .execute(post_id, UserId::from(user.user_id), command)
        .await
    {
        Ok(comment) => ApiResponse::created(CommentResponse::from(comment)),

        Err(AddCommentError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(AddCommentError::RepositoryError(e)) => {
            error!(post_id = %post_id, error = %e, "Failed to add comment");
            ApiResponse::internal_error()
        }
    }
}
