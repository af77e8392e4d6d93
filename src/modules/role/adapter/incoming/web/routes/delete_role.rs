use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::role::application::ports::incoming::use_cases::DeleteRoleError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a role
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = "roles",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Role ID")),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/roles/{id}")]
pub async fn delete_role_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let role_id = path.into_inner();

    match data.role.delete.execute(role_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteRoleError::NotFound) => ApiResponse::not_found("ROLE_NOT_FOUND", "Role not found"),

        Err(DeleteRoleError::RepositoryError(e)) => {
            error!(role_id = %role_id, error = %e, "Failed to delete role");
            ApiResponse::internal_error()
        }
    }
}
