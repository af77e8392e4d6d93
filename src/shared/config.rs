use std::env;
use std::time::Duration;

use sea_orm::ConnectOptions;

/// HTTP + database settings read at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl ServerConfig {
    fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        match env::var(key) {
            Ok(raw) => raw
                .parse::<T>()
                .unwrap_or_else(|_| panic!("Invalid {} value: {}", key, raw)),
            Err(_) => default,
        }
    }

    /// Load `.env.{RUST_ENV}` first, then fall back to `.env`.
    pub fn load_dotenv() {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = Self::parse_or("PORT", 8080u16);
        let db_max_connections = Self::parse_or("DB_MAX_CONNECTIONS", 20u32);
        let db_min_connections = Self::parse_or("DB_MIN_CONNECTIONS", 2u32);

        if db_min_connections > db_max_connections {
            panic!("DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS");
        }

        Self {
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        opt.max_connections(self.db_max_connections)
            .min_connections(self.db_min_connections)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);
        opt
    }
}
