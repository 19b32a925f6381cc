use std::net::IpAddr;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
    pub trusted_proxies: Vec<IpNet>,
    pub rate_limit: u32,
    pub rate_limit_window_secs: u64,
    pub admin_token: Option<String>,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Postgres { database_url: String },
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let store = match env_or("REPORTS_STORE", "postgres").as_str() {
            "postgres" => StoreBackend::Postgres {
                database_url: env_required("DATABASE_URL")?,
            },
            "memory" => StoreBackend::Memory,
            other => return Err(format!("Invalid REPORTS_STORE: {other} (expected postgres or memory)")),
        };

        let host: IpAddr = env_or("REPORTS_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid REPORTS_HOST: {e}"))?;

        let port: u16 = env_or("REPORTS_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid REPORTS_PORT: {e}"))?;

        let max_body_size: usize = env_or("REPORTS_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid REPORTS_MAX_BODY_SIZE: {e}"))?;

        let cors_origins: Vec<String> = env_or("REPORTS_CORS_ORIGINS", "")
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        let trusted_proxies: Vec<IpNet> = env_or("REPORTS_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid REPORTS_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rate_limit: u32 = env_or("REPORTS_RATE_LIMIT", "30")
            .parse()
            .map_err(|e| format!("Invalid REPORTS_RATE_LIMIT: {e}"))?;

        let rate_limit_window_secs: u64 = env_or("REPORTS_RATE_LIMIT_WINDOW_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid REPORTS_RATE_LIMIT_WINDOW_SECS: {e}"))?;

        let admin_token = std::env::var("REPORTS_ADMIN_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        let log_level = env_or("REPORTS_LOG_LEVEL", "info");

        Ok(Config {
            store,
            host,
            port,
            max_body_size,
            cors_origins,
            trusted_proxies,
            rate_limit,
            rate_limit_window_secs,
            admin_token,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
