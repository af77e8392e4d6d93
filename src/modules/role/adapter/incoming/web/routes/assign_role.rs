use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::map_assignment_error;
use super::role_response::RoleResponse;

/// Body shared by the assign and remove endpoints.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RoleAssignmentRequest {
    pub user_id: Uuid,
    pub role_id: Uuid,
}

/// Assign a role to a user
#[utoipa::path(
    post,
    path = "/api/roles/assign",
    tag = "roles",
    security(("BearerAuth" = [])),
    request_body = RoleAssignmentRequest,
    responses(
        (status = 200, description = "Assigned role (unchanged if already assigned)", body = inline(SuccessResponse<RoleResponse>)),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User or role not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/roles/assign")]
pub async fn assign_role_handler(
    _user: AuthenticatedUser,
    req: web::Json<RoleAssignmentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data
        .role
        .assign
        .execute(UserId::from(req.user_id), req.role_id)
        .await
    {
        Ok(role) => ApiResponse::success(RoleResponse::from(role)),
        Err(e) => map_assignment_error(e),
    }
}
