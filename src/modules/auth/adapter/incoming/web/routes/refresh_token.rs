use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    /// Refresh token issued at login or registration
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    /// Newly issued access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,
}

/// Refresh access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "New access token issued",
            body = inline(SuccessResponse<RefreshTokenResponseBody>)
        ),
        (
            status = 401,
            description = "Refresh token expired, invalid or of the wrong type",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_REFRESH_TOKEN",
                    "message": "Invalid refresh token"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Token refresh attempt");

    match data.auth.refresh_token.execute(&req.refresh_token).await {
        Ok(output) => {
            info!("Token refreshed successfully");
            ApiResponse::success(RefreshTokenResponseBody {
                access_token: output.access_token,
            })
        }

        Err(RefreshTokenError::TokenExpired) => {
            warn!("Token refresh failed: Token expired");
            ApiResponse::unauthorized(
                "REFRESH_TOKEN_EXPIRED",
                "Refresh token has expired. Please login again.",
            )
        }

        Err(RefreshTokenError::InvalidToken) => {
            warn!("Token refresh failed: Invalid token");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid refresh token")
        }

        Err(RefreshTokenError::InvalidTokenType) => {
            warn!("Token refresh failed: Wrong token type");
            ApiResponse::unauthorized(
                "INVALID_TOKEN_TYPE",
                "Invalid token type. Please use a refresh token.",
            )
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }
    }
}
