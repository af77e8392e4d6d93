use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::community::application::ports::incoming::use_cases::CommunityMembershipError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::community_not_found;

fn membership_response(
    community_id: Uuid,
    result: Result<(), CommunityMembershipError>,
) -> HttpResponse {
    match result {
        Ok(()) => ApiResponse::no_content(),
        Err(CommunityMembershipError::NotFound) => community_not_found(),
        Err(CommunityMembershipError::RepositoryError(e)) => {
            error!(community_id = %community_id, error = %e, "Membership change failed");
            ApiResponse::internal_error()
        }
    }
}

/// Join a community
#[utoipa::path(
    post,
    path = "/api/communities/{id}/join",
    tag = "communities",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Community ID")),
    responses(
        (status = 204, description = "Caller is a member (idempotent)"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Community not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/communities/{id}/join")]
pub async fn join_community_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let community_id = path.into_inner();
    let result = data
        .community
        .join
        .execute(community_id, UserId::from(user.user_id))
        .await;

    membership_response(community_id, result)
}

/// Leave a community
#[utoipa::path(
    post,
    path = "/api/communities/{id}/leave",
    tag = "communities",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Community ID")),
    responses(
        (status = 204, description = "Caller is not a member (idempotent)"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Community not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/communities/{id}/leave")]
pub async fn leave_community_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let community_id = path.into_inner();
    let result = data
        .community
        .leave
        .execute(community_id, UserId::from(user.user_id))
        .await;

    membership_response(community_id, result)
}
