mod create_role;
mod delete_role;
mod get_role;
mod list_roles;
mod role_assignment;

pub use create_role::{CreateRoleCommand, CreateRoleError, CreateRoleUseCase};
pub use delete_role::{DeleteRoleError, DeleteRoleUseCase};
pub use get_role::{GetRoleByNameUseCase, GetRoleError, GetRoleUseCase};
pub use list_roles::{ListRolesError, ListRolesUseCase};
pub use role_assignment::{AssignRoleUseCase, RemoveRoleUseCase, RoleAssignmentError};
