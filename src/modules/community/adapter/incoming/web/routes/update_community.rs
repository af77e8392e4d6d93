use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::community::application::ports::incoming::use_cases::{
    UpdateCommunityCommand, UpdateCommunityError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::community_response::CommunityResponse;
use super::{community_not_found, map_field_error};

/// Omitted or blank fields keep their current value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateCommunityRequest {
    #[schema(example = "rust-lang")]
    #[serde(default)]
    pub name: Option<String>,
    #[schema(example = "Everything Rust")]
    #[serde(default)]
    pub description: Option<String>,
}

/// Update a community
#[utoipa::path(
    patch,
    path = "/api/communities/{id}",
    tag = "communities",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Community ID")),
    request_body = UpdateCommunityRequest,
    responses(
        (status = 200, description = "Updated community", body = inline(SuccessResponse<CommunityResponse>)),
        (status = 400, description = "Invalid name or description", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not the admin", body = ErrorResponse),
        (status = 404, description = "Community not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/communities/{id}")]
pub async fn update_community_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCommunityRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = match UpdateCommunityCommand::new(req.name, req.description) {
        Ok(cmd) => cmd,
        Err(e) => return map_field_error(e),
    };
    let community_id = path.into_inner();

    match data
        .community
        .update
        .execute(community_id, UserId::from(user.user_id), command)
        .await
    {
        Ok(community) => ApiResponse::success(CommunityResponse::from(community)),

        Err(UpdateCommunityError::NotFound) => community_not_found(),

        Err(UpdateCommunityError::NotAdmin) => ApiResponse::forbidden(
            "NOT_COMMUNITY_ADMIN",
            "Only the community admin can update it",
        ),

        Err(UpdateCommunityError::RepositoryError(e)) => {
            error!(community_id = %community_id, error = %e, "Failed to update community");
            ApiResponse::internal_error()
        }
    }
}
