use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::CreatePostCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::post_response::PostResponse;
use super::{map_content_error, map_create_post_error};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreatePostRequest {
    /// Trimmed; must not be blank
    #[schema(example = "Hello, world!")]
    pub content: String,
    #[serde(default)]
    pub community_id: Option<Uuid>,
}

/// Create a post
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    security(("BearerAuth" = [])),
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Created post", body = inline(SuccessResponse<PostResponse>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Community not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreatePostCommand::new(&req.content, req.community_id) {
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
