use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::GetUserError;
use crate::AppState;

use super::user_response::UserProfileResponse;

/// User by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{id}")]
pub async fn get_user_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.user.get_user.execute(user_id).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),

        Err(GetUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(GetUserError::QueryError(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load user");
            ApiResponse::internal_error()
        }
    }
}
