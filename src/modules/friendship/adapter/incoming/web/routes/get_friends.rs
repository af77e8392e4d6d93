use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::friendship::application::ports::incoming::use_cases::GetFriendsError;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::routes::UserProfileResponse;
use crate::AppState;

/// My friends
#[utoipa::path(
    get,
    path = "/api/friendships/friends",
    tag = "friendships",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Users with an accepted friendship", body = inline(SuccessResponse<Vec<UserProfileResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/friendships/friends")]
pub async fn get_friends_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .friendship
        .get_friends
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(friends) => ApiResponse::success(
            friends
                .into_iter()
                .map(UserProfileResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(GetFriendsError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load friends");
            ApiResponse::internal_error()
        }
    }
}
