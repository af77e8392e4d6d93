use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::ports::incoming::use_cases::GetPendingRequestsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::friendship_response::FriendshipResponse;

/// My pending incoming requests
#[utoipa::path(
    get,
    path = "/api/friendships/pending",
    tag = "friendships",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Pending requests, newest first", body = inline(SuccessResponse<Vec<FriendshipResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/friendships/pending")]
pub async fn get_pending_requests_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .friendship
        .get_pending
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(requests) => ApiResponse::success(
            requests
                .into_iter()
                .map(FriendshipResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(GetPendingRequestsError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load pending requests");
            ApiResponse::internal_error()
        }
    }
}
