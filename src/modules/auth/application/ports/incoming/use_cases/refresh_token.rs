use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct RefreshTokenOutput {
    pub access_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Token is not a refresh token")]
    InvalidTokenType,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenOutput, RefreshTokenError>;
}
