use std::env;

use crate::search::SearchBackend;

const DEFAULT_MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    // Pool
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,

    // Query layer
    pub search_backend: SearchBackend,
    pub max_page_size: u32,

    /// Bearer token required on `/api/*`; auth is disabled when unset.
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: lookup("PORT").unwrap_or_else(|| "8080".into()).parse()?,

            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".into())
                .parse()?,
            db_acquire_timeout_secs: lookup("DB_ACQUIRE_TIMEOUT_SECS")
                .unwrap_or_else(|| "5".into())
                .parse()?,

            search_backend: lookup("SEARCH_PROVIDER")
                .unwrap_or_else(|| "postgres".into())
                .parse()?,
            max_page_size: lookup("MAX_PAGE_SIZE")
                .unwrap_or_else(|| DEFAULT_MAX_PAGE_SIZE.to_string())
                .parse()?,

            api_token: lookup("API_TOKEN").filter(|t| !t.is_empty()),
        })
    }
}
