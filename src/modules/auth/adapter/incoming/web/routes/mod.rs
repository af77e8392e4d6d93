mod login_user;
mod refresh_token;
mod register_user;

pub use login_user::{
    __path_login_user_handler, login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo,
};
pub use refresh_token::{
    __path_refresh_token_handler, refresh_token_handler, RefreshTokenRequestDto,
    RefreshTokenResponseBody,
};
pub use register_user::{
    __path_register_user_handler, register_user_handler, RegisterUserRequest,
    RegisterUserResponse, RegisteredUser,
};
