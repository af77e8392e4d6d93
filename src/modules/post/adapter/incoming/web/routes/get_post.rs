use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::post::application::ports::incoming::use_cases::GetPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::post_response::PostResponse;

/// Post by id
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post", body = inline(SuccessResponse<PostResponse>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts/{id}")]
pub async fn get_post_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get_single.execute(post_id).await {
        Ok(post) => ApiResponse::success(PostResponse::from(post)),

        Err(GetPostError::NotFound) => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),

        Err(GetPostError::QueryError(e)) => {
            error!(post_id = %post_id, error = %e, "Failed to load post");
            ApiResponse::internal_error()
        }
    }
}
