use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::assign_role::RoleAssignmentRequest;
use super::map_assignment_error;
use super::role_response::RoleResponse;

/// Remove a role from a user
#[utoipa::path(
    post,
    path = "/api/roles/remove",
    tag = "roles",
    security(("BearerAuth" = [])),
    request_body = RoleAssignmentRequest,
    responses(
        (status = 200, description = "Removed role (unchanged if not assigned)", body = inline(SuccessResponse<RoleResponse>)),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User or role not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/roles/remove")]
pub async fn remove_role_handler(
    _user: AuthenticatedUser,
    req: web::Json<RoleAssignmentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data
        .role
        .remove
        .execute(UserId::from(req.user_id), req.role_id)
        .await
    {
        Ok(role) => ApiResponse::success(RoleResponse::from(role)),
        Err(e) => map_assignment_error(e),
    }
}
