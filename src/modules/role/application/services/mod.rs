mod assign_role_service;
mod create_role_service;
mod delete_role_service;
mod get_role_service;
mod list_roles_service;
mod remove_role_service;

pub use assign_role_service::AssignRoleService;
pub use create_role_service::CreateRoleService;
pub use delete_role_service::DeleteRoleService;
pub use get_role_service::GetRoleService;
pub use list_roles_service::ListRolesService;
pub use remove_role_service::RemoveRoleService;
