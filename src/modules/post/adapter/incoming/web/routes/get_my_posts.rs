use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::map_user_posts_error;
use super::post_response::{post_list, PostResponse};

/// My posts
#[utoipa::path(
    get,
    path = "/api/posts/mine",
    tag = "posts",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Posts of the caller", body = inline(SuccessResponse<Vec<PostResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts/mine")]
pub async fn get_my_posts_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .post
        .get_by_author
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(posts) => ApiResponse::success(post_list(posts)),
        Err(e) => map_user_posts_error(e),
    }
}
