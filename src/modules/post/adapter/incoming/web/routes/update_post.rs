use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::{UpdatePostCommand, UpdatePostError};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::map_content_error;
use super::post_response::PostResponse;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdatePostRequest {
    #[schema(example = "Edited: hello, world!")]
    pub content: String,
}

/// Update a post
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Post ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated post", body = inline(SuccessResponse<PostResponse>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/posts/{id}")]
pub async fn update_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdatePostCommand::new(&req.content) {
        Ok(cmd) => cmd,
        Err(e) => return map_content_error(e),
    };
    let post_id = path.into_inner();

    match data
        .post
        .update
        .execute(post_id, UserId::from(user.user_id), command)
        .await
    {
        Ok(post) => ApiResponse::success(PostResponse::from(post)),

        Err(UpdatePostError::NotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(UpdatePostError::NotAuthor) => {
            ApiResponse::forbidden("NOT_POST_AUTHOR", "Only the author can edit the post")
        }

        Err(UpdatePostError::RepositoryError(e)) => {
            error!(post_id = %post_id, error = %e, "Failed to update post");
            ApiResponse::internal_error()
        }
    }
}
