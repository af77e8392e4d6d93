mod assign_role;
mod create_role;
mod delete_role;
mod get_role;
mod get_role_by_name;
mod list_roles;
mod remove_role;
mod role_response;

pub use assign_role::{__path_assign_role_handler, assign_role_handler, RoleAssignmentRequest};
pub use create_role::{__path_create_role_handler, create_role_handler, CreateRoleRequest};
pub use delete_role::{__path_delete_role_handler, delete_role_handler};
pub use get_role::{__path_get_role_handler, get_role_handler};
pub use get_role_by_name::{__path_get_role_by_name_handler, get_role_by_name_handler, RoleNameQuery};
pub use list_roles::{__path_list_roles_handler, list_roles_handler};
pub use remove_role::{__path_remove_role_handler, remove_role_handler};
pub use role_response::RoleResponse;

use actix_web::HttpResponse;
use tracing::error;

use crate::role::application::ports::incoming::use_cases::{GetRoleError, RoleAssignmentError};
use crate::shared::api::ApiResponse;

pub(super) fn map_get_role_error(err: GetRoleError) -> HttpResponse {
    match err {
        GetRoleError::NotFound => ApiResponse::not_found("ROLE_NOT_FOUND", "Role not found"),
        GetRoleError::QueryError(e) => {
            error!(error = %e, "Failed to load role");
            ApiResponse::internal_error()
        }
    }
}

pub(super) fn map_assignment_error(err: RoleAssignmentError) -> HttpResponse {
    match err {
        RoleAssignmentError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        RoleAssignmentError::RoleNotFound => {
            ApiResponse::not_found("ROLE_NOT_FOUND", "Role not found")
        }
        RoleAssignmentError::RepositoryError(e) => {
            error!(error = %e, "Role assignment change failed");
            ApiResponse::internal_error()
        }
    }
}
