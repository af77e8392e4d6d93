use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginUserCommand, LoginUserError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// JWT refresh token (long-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    refresh_token: String,

    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "johndoe")]
    username: String,
}

/// User login
///
/// Authenticates a user with username and password, returns JWT access and refresh tokens.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refresh_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "johndoe"
                    }
                }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password"
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
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let command = LoginUserCommand::new(dto.username, dto.password);

    info!(username = %command.username, "Login attempt");

    match data.auth.login.execute(command).await {
        Ok(output) => {
            info!(user_id = %output.user_id, "User logged in successfully");

            ApiResponse::success(LoginResponse {
                access_token: output.access_token,
                refresh_token: output.refresh_token,
                user: LoginUserInfo {
                    id: output.user_id.to_string(),
                    username: output.username,
                },
            })
        }

        Err(LoginUserError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginUserError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginUserError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginUserError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::incoming::use_cases::{
        LoginUserOutput, LoginUserUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockLoginUser {
        result: Result<LoginUserOutput, LoginUserError>,
    }

    #[async_trait]
    impl LoginUserUseCase for MockLoginUser {
        async fn execute(
            &self,
            _command: LoginUserCommand,
        ) -> Result<LoginUserOutput, LoginUserError> {
            self.result.clone()
        }
    }

    async fn call(mock: MockLoginUser) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default().with_login_user(mock).build();

        let app = test::init_service(App::new().app_data(app_state).service(login_user_handler))
            .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(&LoginRequestDto {
                username: "johndoe".to_string(),
                password: "SecurePass123!".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let json: Value = test::read_body_json(resp).await;
        (status, json)
    }

    #[actix_web::test]
    async fn test_login_success() {
        let user_id = Uuid::new_v4();
        let mock = MockLoginUser {
            result: Ok(LoginUserOutput {
                user_id: UserId::from(user_id),
                username: "johndoe".to_string(),
                access_token: "access".to_string(),
                refresh_token: "refresh".to_string(),
            }),
        };

        let (status, body) = call(mock).await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "access");
        assert_eq!(body["data"]["refresh_token"], "refresh");
        assert_eq!(body["data"]["user"]["id"], user_id.to_string());
        assert_eq!(body["data"]["user"]["username"], "johndoe");
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let mock = MockLoginUser {
            result: Err(LoginUserError::InvalidCredentials),
        };

        let (status, body) = call(mock).await;

        assert_eq!(status, 401);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn test_login_query_error() {
        let mock = MockLoginUser {
            result: Err(LoginUserError::QueryError("db down".to_string())),
        };

        let (status, body) = call(mock).await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
