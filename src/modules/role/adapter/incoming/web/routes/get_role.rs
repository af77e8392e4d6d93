use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::map_get_role_error;
use super::role_response::RoleResponse;

/// Role by id
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = "roles",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role", body = inline(SuccessResponse<RoleResponse>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/roles/{id}")]
pub async fn get_role_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.role.get_by_id.execute(path.into_inner()).await {
        Ok(role) => ApiResponse::success(RoleResponse::from(role)),
        Err(e) => map_get_role_error(e),
    }
}
