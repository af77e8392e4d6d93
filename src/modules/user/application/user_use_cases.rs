use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    GetUserUseCase, SearchUsersUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub get_user: Arc<dyn GetUserUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub search: Arc<dyn SearchUsersUseCase + Send + Sync>,
}
