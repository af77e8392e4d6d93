use std::sync::Arc;

use crate::role::application::ports::incoming::use_cases::{
    AssignRoleUseCase, CreateRoleUseCase, DeleteRoleUseCase, GetRoleByNameUseCase,
    GetRoleUseCase, ListRolesUseCase, RemoveRoleUseCase,
};

#[derive(Clone)]
pub struct RoleUseCases {
    pub create: Arc<dyn CreateRoleUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteRoleUseCase + Send + Sync>,
    pub get_by_id: Arc<dyn GetRoleUseCase + Send + Sync>,
    pub get_by_name: Arc<dyn GetRoleByNameUseCase + Send + Sync>,
    pub list: Arc<dyn ListRolesUseCase + Send + Sync>,
    pub assign: Arc<dyn AssignRoleUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveRoleUseCase + Send + Sync>,
}
