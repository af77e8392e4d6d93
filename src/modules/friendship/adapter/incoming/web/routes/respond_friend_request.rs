use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::domain::entities::Friendship;
use crate::friendship::application::ports::incoming::use_cases::RespondFriendRequestError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::friendship_response::FriendshipResponse;

fn respond(result: Result<Friendship, RespondFriendRequestError>) -> HttpResponse {
    match result {
        Ok(friendship) => ApiResponse::success(FriendshipResponse::from(friendship)),

        Err(RespondFriendRequestError::NotFound) => {
            ApiResponse::not_found("FRIENDSHIP_NOT_FOUND", "Friend request not found")
        }

        Err(RespondFriendRequestError::NotReceiver) => ApiResponse::forbidden(
            "NOT_REQUEST_RECEIVER",
            "Only the receiver can respond to a friend request",
        ),

        Err(e @ RespondFriendRequestError::InvalidState(_)) => {
            ApiResponse::bad_request("INVALID_FRIENDSHIP_STATE", &e.to_string())
        }

        Err(RespondFriendRequestError::RepositoryError(e)) => {
            error!(error = %e, "Failed to answer friend request");
            ApiResponse::internal_error()
        }
    }
}

/// Accept a friend request
#[utoipa::path(
    post,
    path = "/api/friendships/{id}/accept",
    tag = "friendships",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Friendship ID")),
    responses(
        (status = 200, description = "Updated friendship", body = inline(SuccessResponse<FriendshipResponse>)),
        (status = 400, description = "Request is no longer pending", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not the receiver", body = ErrorResponse),
        (status = 404, description = "Friend request not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/friendships/{id}/accept")]
pub async fn accept_friend_request_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(
        data.friendship
            .accept
            .execute(path.into_inner(), UserId::from(user.user_id))
            .await,
    )
}

/// Decline a friend request
#[utoipa::path(
    post,
    path = "/api/friendships/{id}/decline",
    tag = "friendships",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Friendship ID")),
    responses(
        (status = 200, description = "Updated friendship", body = inline(SuccessResponse<FriendshipResponse>)),
        (status = 400, description = "Request is no longer pending", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Caller is not the receiver", body = ErrorResponse),
        (status = 404, description = "Friend request not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/friendships/{id}/decline")]
pub async fn decline_friend_request_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(
        data.friendship
            .decline
            .execute(path.into_inner(), UserId::from(user.user_id))
            .await,
    )
}
