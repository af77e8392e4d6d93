mod get_me;
mod get_user;
mod search_users;
mod update_me;
mod user_response;

pub use get_me::{__path_get_me_handler, get_me_handler};
pub use get_user::{__path_get_user_handler, get_user_handler};
pub use search_users::{__path_search_users_handler, search_users_handler, SearchUsersParams};
pub use update_me::{__path_update_me_handler, update_me_handler, UpdateProfileRequest};
pub use user_response::UserProfileResponse;
