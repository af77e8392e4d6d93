use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::community::application::ports::incoming::use_cases::GetUserCommunitiesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::community_response::{community_list, CommunityResponse};

/// Communities of a user
#[utoipa::path(
    get,
    path = "/api/communities/user/{user_id}",
    tag = "communities",
    security(("BearerAuth" = [])),
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Communities the user belongs to, by name", body = inline(SuccessResponse<Vec<CommunityResponse>>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/communities/user/{user_id}")]
pub async fn get_user_communities_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .community
        .get_user_communities
        .execute(UserId::from(user_id))
        .await
    {
        Ok(communities) => ApiResponse::success(community_list(communities)),

        Err(GetUserCommunitiesError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(GetUserCommunitiesError::QueryError(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load user communities");
            ApiResponse::internal_error()
        }
    }
}
