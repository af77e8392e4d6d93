mod get_user_service;
mod search_users_service;
mod update_profile_service;

pub use get_user_service::GetUserService;
pub use search_users_service::SearchUsersService;
pub use update_profile_service::UpdateProfileService;
