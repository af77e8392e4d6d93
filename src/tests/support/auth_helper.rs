use std::sync::Arc;

use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "social-backend-test".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    }
}

/// Token provider the `AuthenticatedUser` extractor reads in route tests.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// `Authorization` header carrying a valid access token for `user_id`.
pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    let token = JwtTokenService::new(test_jwt_config())
        .generate_access_token(user_id)
        .expect("access token");
    ("Authorization", format!("Bearer {}", token))
}
