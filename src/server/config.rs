use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub app_addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// `DATABASE_URL` is required. `APP_ADDR` falls back to `0.0.0.0:8080`.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let app_addr = std::env::var("APP_ADDR").unwrap_or_else(|_| DEFAULT_APP_ADDR.to_string());

        Ok(Self {
            database_url,
            app_addr: parse_addr("APP_ADDR", &app_addr)?,
        })
    }
}

fn parse_addr(name: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
