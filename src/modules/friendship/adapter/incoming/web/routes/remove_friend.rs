use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::ports::incoming::use_cases::RemoveFriendError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove a friend
#[utoipa::path(
    delete,
    path = "/api/friendships/friends/{friend_id}",
    tag = "friendships",
    security(("BearerAuth" = [])),
    params(("friend_id" = Uuid, Path, description = "User ID of the friend")),
    responses(
        (status = 204, description = "Friendship removed in both directions"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "No friendship with this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/friendships/friends/{friend_id}")]
pub async fn remove_friend_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .friendship
        .remove
        .execute(UserId::from(user.user_id), UserId::from(path.into_inner()))
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(RemoveFriendError::NotFound) => {
            ApiResponse::not_found("FRIENDSHIP_NOT_FOUND", "Friendship not found")
        }

        Err(RemoveFriendError::RepositoryError(e)) => {
            error!(error = %e, "Failed to remove friend");
            ApiResponse::internal_error()
        }
    }
}
