use actix_web::{get, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::post::adapter::incoming::web::routes::{
    map_content_error, map_create_post_error, PostResponse,
};
use crate::post::application::ports::incoming::use_cases::{
    CreatePostCommand, GetCommunityPostsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::community_not_found;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CommunityPostRequest {
    #[schema(example = "Hello, community!")]
    pub content: String,
}

/// Post into a community
///
/// Goes through the regular post creation flow with the community set.
#[utoipa::path(
    post,
    path = "/api/communities/{id}/posts",
    tag = "communities",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Community ID")),
    request_body = CommunityPostRequest,
    responses(
        (status = 201, description = "Created post", body = inline(SuccessResponse<PostResponse>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Community not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/communities/{id}/posts")]
pub async fn create_community_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CommunityPostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreatePostCommand::new(&req.content, Some(path.into_inner())) {
        Ok(cmd) => cmd,
        Err(e) => return map_content_error(e),
    };

    match data
        .post
        .create
        .execute(UserId::from(user.user_id), command)
        .await
    {
        Ok(post) => ApiResponse::created(PostResponse::from(post)),
        Err(e) => map_create_post_error(e),
    }
}

/// Posts of a community
#[utoipa::path(
    get,
    path = "/api/communities/{id}/posts",
    tag = "communities",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Community ID")),
    responses(
        (status = 200, description = "Posts, newest first", body = inline(SuccessResponse<Vec<PostResponse>>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Community not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/communities/{id}/posts")]
pub async fn get_community_posts_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let community_id = path.into_inner();

    match data.post.get_by_community.execute(community_id).await {
        Ok(posts) => ApiResponse::success(
            posts.into_iter().map(PostResponse::from).collect::<Vec<_>>(),
        ),

        Err(GetCommunityPostsError::CommunityNotFound) => community_not_found(),

        Err(GetCommunityPostsError::QueryError(e)) => {
            error!(community_id = %community_id, error = %e, "Failed to load community posts");
            ApiResponse::internal_error()
        }
    }
}
