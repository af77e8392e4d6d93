mod login_user;
mod refresh_token;
mod register_user;

pub use login_user::{LoginUserCommand, LoginUserError, LoginUserOutput, LoginUserUseCase};
pub use refresh_token::{RefreshTokenError, RefreshTokenOutput, RefreshTokenUseCase};
pub use register_user::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserOutput,
    RegisterUserUseCase,
};
