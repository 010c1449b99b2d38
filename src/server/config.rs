use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

/// Application configuration loaded from the environment at startup.
pub struct Config {
    /// SeaORM connection string, SQLite or Postgres.
    pub database_url: String,
    /// Port the HTTP server binds on `0.0.0.0`.
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// - `DATABASE_URL` - optional, defaults to a SQLite file under `/tmp`
    /// - `PORT` - optional, defaults to `3000`
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: database_url(std::env::var("DATABASE_URL").ok()),
            port: port(std::env::var("PORT").ok())?,
        })
    }
}

/// Resolves the database URL, accepting Heroku-style `postgres://` URLs.
fn database_url(value: Option<String>) -> String {
    match value {
        Some(url) => match url.strip_prefix("postgres://") {
            Some(rest) => format!("postgresql://{}", rest),
            None => url,
        },
        None => DEFAULT_DATABASE_URL.to_string(),
    }
}

fn port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: "PORT".to_string(),
            value,
        }),
        None => Ok(DEFAULT_PORT),
    }
}
