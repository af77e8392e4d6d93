mod get_user;
mod search_users;
mod update_profile;

pub use get_user::{GetUserError, GetUserUseCase};
pub use search_users::{
    SearchUsersCommand, SearchUsersCommandError, SearchUsersError, SearchUsersUseCase,
};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileUseCase,
};
