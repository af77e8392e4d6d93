use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::AppState;

use super::user_response::UserProfileResponse;

/// Omitted or blank fields keep their current value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "John")]
    #[serde(default)]
    pub first_name: Option<String>,

    #[schema(example = "Doe")]
    #[serde(default)]
    pub last_name: Option<String>,

    #[schema(example = 30)]
    #[serde(default)]
    pub age: Option<i32>,

    #[schema(example = "MALE")]
    #[serde(default)]
    pub gender: Option<String>,
}

/// Update the current user's profile
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 400, description = "Invalid age, gender or name", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/me")]
pub async fn update_me_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(user.user_id);
    let req = req.into_inner();

    let command = match UpdateProfileCommand::new(req.first_name, req.last_name, req.age, req.gender)
    {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(user_id = %user_id, error = %e, "Invalid profile update");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.user.update_profile.execute(user_id, command).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse::from(profile)),

        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to update profile");
            ApiResponse::internal_error()
        }
    }
}
