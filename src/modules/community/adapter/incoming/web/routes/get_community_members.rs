use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::community::application::ports::incoming::use_cases::GetCommunityMembersError;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::routes::UserProfileResponse;
use crate::AppState;

use super::community_not_found;

/// Members of a community
#[utoipa::path(
    get,
    path = "/api/communities/{id}/members",
    tag = "communities",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Community ID")),
    responses(
        (status = 200, description = "Members, by username", body = inline(SuccessResponse<Vec<UserProfileResponse>>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Community not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/communities/{id}/members")]
pub async fn get_community_members_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let community_id = path.into_inner();

    match data.community.get_members.execute(community_id).await {
        Ok(members) => ApiResponse::success(
            members
                .into_iter()
                .map(UserProfileResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(GetCommunityMembersError::NotFound) => community_not_found(),

        Err(GetCommunityMembersError::QueryError(e)) => {
            error!(community_id = %community_id, error = %e, "Failed to load members");
            ApiResponse::internal_error()
        }
    }
}
