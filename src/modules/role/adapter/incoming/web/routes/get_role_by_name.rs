use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::map_get_role_error;
use super::role_response::RoleResponse;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoleNameQuery {
    /// Exact role name, e.g. `ROLE_USER`
    pub name: String,
}

/// Role by name
#[utoipa::path(
    get,
    path = "/api/roles/search",
    tag = "roles",
    security(("BearerAuth" = [])),
    params(RoleNameQuery),
    responses(
        (status = 200, description = "Role", body = inline(SuccessResponse<RoleResponse>)),
        (status = 400, description = "Missing name parameter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/roles/search")]
pub async fn get_role_by_name_handler(
    _user: AuthenticatedUser,
    query: web::Query<RoleNameQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.role.get_by_name.execute(query.into_inner().name).await {
        Ok(role) => ApiResponse::success(RoleResponse::from(role)),
        Err(e) => map_get_role_error(e),
    }
}
