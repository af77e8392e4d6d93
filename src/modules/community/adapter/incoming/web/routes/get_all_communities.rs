use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::community::application::ports::incoming::use_cases::GetAllCommunitiesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::community_response::{community_list, CommunityResponse};

/// List communities
#[utoipa::path(
    get,
    path = "/api/communities",
    tag = "communities",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Communities, newest first", body = inline(SuccessResponse<Vec<CommunityResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/communities")]
pub async fn get_all_communities_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.community.get_all.execute().await {
        Ok(communities) => ApiResponse::success(community_list(communities)),

        Err(GetAllCommunitiesError::QueryError(e)) => {
            error!(error = %e, "Failed to load communities");
            ApiResponse::internal_error()
        }
    }
}
