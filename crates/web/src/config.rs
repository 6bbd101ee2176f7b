use anyhow::{Context, Result};
use storage::DatabaseConfig;

/// Process configuration, loaded once at startup. The four PG_*
/// variables are required and missing ones fail loudly here rather
/// than at the first query. The bind address falls back to
/// 0.0.0.0:8000.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a number")?,
            database: DatabaseConfig {
                name: std::env::var("PG_DB_NAME")
                    .context("Cannot load PG_DB_NAME env variable")?,
                user: std::env::var("PG_USER").context("Cannot load PG_USER env variable")?,
                password: std::env::var("PG_PASSWORD")
                    .context("Cannot load PG_PASSWORD env variable")?,
                host: std::env::var("PG_DB_HOST")
                    .context("Cannot load PG_DB_HOST env variable")?,
            },
        })
    }
}
