use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::community::application::ports::incoming::use_cases::DeleteCommunityError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::community_not_found;

/// Delete a community
#[utoipa::path(
    delete,
    path = "/api/communities/{id}",
    tag = "communities",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Community ID")),
    responses(
        (status = 204, description = "Community deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not the admin", body = ErrorResponse),
        (status = 404, description = "Community not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/communities/{id}")]
pub async fn delete_community_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let community_id = path.into_inner();

    match data
        .community
        .delete
        .execute(community_id, UserId::from(user.user_id))
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteCommunityError::NotFound) => community_not_found(),

        Err(DeleteCommunityError::NotAdmin) => ApiResponse::forbidden(
            "NOT_COMMUNITY_ADMIN",
            "Only the community admin can delete it",
        ),

        Err(DeleteCommunityError::RepositoryError(e)) => {
            error!(community_id = %community_id, error = %e, "Failed to delete community");
            ApiResponse::internal_error()
        }
    }
}
