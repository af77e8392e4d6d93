use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::role::application::ports::incoming::use_cases::{CreateRoleCommand, CreateRoleError};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::role_response::RoleResponse;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateRoleRequest {
    /// `ROLE_USER` or `ROLE_ADMIN`
    #[schema(example = "ROLE_ADMIN")]
    pub name: String,
}

/// Create a role
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = "roles",
    security(("BearerAuth" = [])),
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = inline(SuccessResponse<RoleResponse>)),
        (status = 400, description = "Unknown role name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 409, description = "Role already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/roles")]
pub async fn create_role_handler(
    _user: AuthenticatedUser,
    req: web::Json<CreateRoleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateRoleCommand::new(&req.name) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(name = %req.name, "Rejected unknown role name");
            return ApiResponse::bad_request("INVALID_ROLE_NAME", &e.to_string());
        }
    };

    match data.role.create.execute(command).await {
        Ok(role) => ApiResponse::created(RoleResponse::from(role)),

        Err(CreateRoleError::AlreadyExists) => {
            ApiResponse::conflict("ROLE_ALREADY_EXISTS", "Role already exists")
        }

        Err(CreateRoleError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create role");
            ApiResponse::internal_error()
        }
    }
}
