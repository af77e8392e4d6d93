use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::ports::{
    incoming::use_cases::{RefreshTokenError, RefreshTokenOutput, RefreshTokenUseCase},
    outgoing::{TokenError, TokenProvider},
};

#[derive(Clone)]
pub struct RefreshTokenService {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl RefreshTokenService {
    pub fn new(token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl RefreshTokenUseCase for RefreshTokenService {
    async fn execute(&self, refresh_token: &str) -> Result<RefreshTokenOutput, RefreshTokenError> {
        let access_token = self
            .token_provider
            .refresh_access_token(refresh_token)
            .map_err(|e| {
                warn!(error = %e, "Refresh token rejected");
                match e {
                    TokenError::TokenExpired => RefreshTokenError::TokenExpired,
                    TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
                    TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
                    TokenError::TokenNotYetValid
                    | TokenError::InvalidSignature
                    | TokenError::MalformedToken => RefreshTokenError::InvalidToken,
                }
            })?;

        Ok(RefreshTokenOutput { access_token })
    }
}
