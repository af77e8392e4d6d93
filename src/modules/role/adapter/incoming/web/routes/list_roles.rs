use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::role::application::ports::incoming::use_cases::ListRolesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::role_response::RoleResponse;

/// List roles
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = "roles",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "All roles", body = inline(SuccessResponse<Vec<RoleResponse>>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/roles")]
pub async fn list_roles_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.role.list.execute().await {
        Ok(roles) => {
            ApiResponse::success(roles.into_iter().map(RoleResponse::from).collect::<Vec<_>>())
        }
        Err(ListRolesError::QueryError(e)) => {
            error!(error = %e, "Failed to list roles");
            ApiResponse::internal_error()
        }
    }
}
