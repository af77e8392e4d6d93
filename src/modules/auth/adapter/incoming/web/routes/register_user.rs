use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Username (unique, 3-50 characters)
    #[schema(example = "johndoe")]
    pub username: String,

    /// Password (8-128 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// First name, defaults to the username
    #[schema(example = "John")]
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name
    #[schema(example = "Doe")]
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    /// JWT access token (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// JWT refresh token (long-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    refresh_token: String,

    /// Created user details
    user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "johndoe")]
    username: String,

    #[schema(example = "John")]
    first_name: String,

    #[schema(example = "Doe")]
    last_name: Option<String>,

    /// Granted role names
    #[schema(example = json!(["ROLE_USER"]))]
    roles: Vec<String>,

    created_at: DateTime<Utc>,
}

fn map_command_error(err: RegisterUserCommandError) -> HttpResponse {
    let code = match err {
        RegisterUserCommandError::EmptyUsername
        | RegisterUserCommandError::InvalidUsernameLength
        | RegisterUserCommandError::InvalidUsernameCharacters => "INVALID_USERNAME",
        RegisterUserCommandError::PasswordTooShort
        | RegisterUserCommandError::PasswordTooLong => "INVALID_PASSWORD",
        RegisterUserCommandError::FirstNameTooLong
        | RegisterUserCommandError::LastNameTooLong => "INVALID_NAME",
    };

    warn!(error = %err, "Invalid registration input");
    ApiResponse::bad_request(code, &err.to_string())
}

fn map_register_error(err: RegisterUserError, username: &str) -> HttpResponse {
    match err {
        RegisterUserError::UsernameTaken => {
            warn!(username = %username, "Username already taken");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "Username is already taken")
        }

        other => {
            error!(username = %username, error = %other, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates an account with the `ROLE_USER` role and returns a token pair.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "User created successfully",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refresh_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "johndoe",
                        "first_name": "John",
                        "last_name": "Doe",
                        "roles": ["ROLE_USER"],
                        "created_at": "2025-06-01T12:00:00Z"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid username" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_USERNAME",
                        "message": "Username must be between 3 and 50 characters"
                    }
                }))),
                ("Invalid password" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_PASSWORD",
                        "message": "Password must be at least 8 characters"
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "Username already taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_ALREADY_EXISTS",
                    "message": "Username is already taken"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let username = req.username.trim().to_string();

    info!(username = %username, "User registration attempt");

    let command =
        match RegisterUserCommand::new(req.username, req.password, req.first_name, req.last_name) {
            Ok(cmd) => cmd,
            Err(e) => return map_command_error(e),
        };

    match data.auth.register.execute(command).await {
        Ok(output) => ApiResponse::created(RegisterUserResponse {
            access_token: output.access_token,
            refresh_token: output.refresh_token,
            user: RegisteredUser {
                id: output.user.id.to_string(),
                username: output.user.username,
                first_name: output.user.first_name,
                last_name: output.user.last_name,
                roles: output.user.roles,
                created_at: output.user.created_at,
            },
        }),

        Err(e) => map_register_error(e, &username),
    }
}
