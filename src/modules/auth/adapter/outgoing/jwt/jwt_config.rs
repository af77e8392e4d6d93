use std::env;

/// Token signing settings, read once at startup.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Access token lifetime, in seconds.
    pub access_token_expiry: i64,
    /// Refresh token lifetime, in seconds. Always longer than the access token's.
    pub refresh_token_expiry: i64,
}

/// Upper bound for `JWT_ACCESS_EXPIRY` (24 hours).
const MAX_ACCESS_EXPIRY: i64 = 86_400;

impl JwtConfig {
    fn parse_expiry(key: &str, default: &str) -> i64 {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    fn check_expiries(access: i64, refresh: i64) -> Result<(), &'static str> {
        if access <= 0 || access > MAX_ACCESS_EXPIRY {
            return Err("JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)");
        }
        if refresh <= access {
            return Err("JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY");
        }
        Ok(())
    }

    /// Reads `JWT_SECRET`, `JWT_ISSUER`, `JWT_ACCESS_EXPIRY` and `JWT_REFRESH_EXPIRY`.
    /// Panics on a missing or short secret and on inconsistent lifetimes.
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", "1800");
        let refresh_token_expiry = Self::parse_expiry("JWT_REFRESH_EXPIRY", "604800");

        if let Err(msg) = Self::check_expiries(access_token_expiry, refresh_token_expiry) {
            panic!("{}", msg);
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "social-backend".to_string());

        Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        }
    }
}
