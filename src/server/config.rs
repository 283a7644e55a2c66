use std::net::{IpAddr, Ipv4Addr};

use crate::server::{
    error::{config::ConfigError, AppError},
    model::favorite::FavoriteScope,
};

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub host: IpAddr,
    pub port: u16,

    pub favorite_scope: FavoriteScope,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Every variable is optional. Unset variables fall back to a local SQLite file,
    /// `0.0.0.0:3000`, and the global duplicate scope.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied
    /// - `Err(AppError::ConfigErr)` - A variable is set to an unusable value
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: parse_env("HOST", DEFAULT_HOST)?,
            port: parse_env("PORT", DEFAULT_PORT)?,
            favorite_scope: parse_env("FAVORITE_DUPLICATE_SCOPE", FavoriteScope::default())?,
        })
    }
}

fn parse_env<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| invalid(name, &value, e.to_string())),
        Err(_) => Ok(default),
    }
}

fn invalid(name: &str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    }
}
