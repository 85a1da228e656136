use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: String,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://formdrop.db");

        let host: IpAddr = env_or("FORMDROP_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FORMDROP_HOST: {e}"))?;

        let port: u16 = env_or("FORMDROP_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FORMDROP_PORT: {e}"))?;

        let static_dir = env_or("FORMDROP_STATIC_DIR", "dist");

        let max_body_size: usize = env_or("FORMDROP_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid FORMDROP_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FORMDROP_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            static_dir,
            max_body_size,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
