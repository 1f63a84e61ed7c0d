use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:9090";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Seed the development dataset on startup when the database is empty.
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and well-formed
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - `DATABASE_URL` is not set
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `BIND_ADDRESS` or `SEED_DATABASE` is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
            })?;

        let seed_database = match lookup("SEED_DATABASE") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidEnvVar {
                name: "SEED_DATABASE".to_string(),
                value,
            })?,
            None => false,
        };

        Ok(Self {
            database_url,
            bind_address,
            seed_database,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}
