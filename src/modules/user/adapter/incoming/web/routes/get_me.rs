use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::GetUserError;
use crate::AppState;

use super::user_response::UserProfileResponse;

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile of the caller", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/me")]
pub async fn get_me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    let user_id = UserId::from(user.user_id);

    match data.user.get_user.execute(user_id).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),

        Err(GetUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(GetUserError::QueryError(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
