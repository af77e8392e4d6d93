use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::post::application::ports::incoming::use_cases::GetAllPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::post_response::{post_list, PostResponse};

/// List all posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Posts, newest first", body = inline(SuccessResponse<Vec<PostResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts")]
pub async fn get_all_posts_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.get_all.execute().await {
        Ok(posts) => ApiResponse::success(post_list(posts)),

        Err(GetAllPostsError::QueryError(e)) => {
            error!(error = %e, "Failed to load posts");
            ApiResponse::internal_error()
        }
    }
}
