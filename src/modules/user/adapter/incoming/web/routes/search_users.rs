use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    SearchUsersCommand, SearchUsersError,
};
use crate::AppState;

use super::user_response::UserProfileResponse;

#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchUsersParams {
    /// Case-insensitive prefix of the first name
    pub first_name: Option<String>,
    /// Case-insensitive prefix of the last name
    pub last_name: Option<String>,
    pub age: Option<i32>,
    /// `MALE` or `FEMALE`
    pub gender: Option<String>,
}

/// Search users
///
/// All filters are optional and combined; results are ordered by username.
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = "users",
    security(("BearerAuth" = [])),
    params(SearchUsersParams),
    responses(
        (status = 200, description = "Matching users", body = inline(SuccessResponse<Vec<UserProfileResponse>>)),
        (status = 400, description = "Invalid filter value", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/search")]
pub async fn search_users_handler(
    _user: AuthenticatedUser,
    params: web::Query<SearchUsersParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

    let command =
        match SearchUsersCommand::new(params.first_name, params.last_name, params.age, params.gender)
        {
            Ok(cmd) => cmd,
            Err(e) => {
                warn!(error = %e, "Invalid user search filter");
                return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
            }
        };

    match data.user.search.execute(command).await {
        Ok(users) => ApiResponse::success(
            users
                .into_iter()
                .map(UserProfileResponse::from)
                .collect::<Vec<_>>(),
        ),

        Err(SearchUsersError::QueryError(e)) => {
            error!(error = %e, "User search failed");
            ApiResponse::internal_error()
        }
    }
}
