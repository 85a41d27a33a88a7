use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::error::AppError;

pub struct Config {
    pub port: u16,
    pub redis_url: Option<String>,
    pub production: bool,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let environment: String = try_load("RUST_ENV", "development")?;

        Ok(Self {
            port: try_load("RUST_PORT", "1111")?,
            redis_url: env::var("REDIS_URL").ok(),
            production: environment.eq_ignore_ascii_case("production"),
        })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            AppError::Config(format!("{key}: {e}"))
        })
}
