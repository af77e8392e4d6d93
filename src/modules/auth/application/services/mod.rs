mod login_user_service;
mod refresh_token_service;
mod register_user_service;

pub use login_user_service::LoginUserService;
pub use refresh_token_service::RefreshTokenService;
pub use register_user_service::RegisterUserService;
