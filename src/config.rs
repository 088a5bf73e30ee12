//! Service configuration, read from the environment

use crate::auth::jwt::JwtConfig;
use std::{fmt::Display, path::PathBuf, str::FromStr};
use tracing::{info, warn};

/// Point balance a fresh session or account starts with
pub const DEFAULT_POINTS: u64 = 5000;
pub const DEFAULT_PORT: u16 = 5003;

/// Credentials for an account seeded at startup
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port
    pub port: u16,
    /// Catalog JSON file; the built-in travel catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Session default point balance
    pub default_points: u64,
    pub jwt: JwtConfig,
    /// Allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
    pub demo_account: Option<DemoAccount>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_path: None,
            default_points: DEFAULT_POINTS,
            jwt: JwtConfig::default(),
            cors_origin: None,
            demo_account: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let demo_account = match (var("DEMO_USERNAME"), var("DEMO_PASSWORD")) {
            (Some(username), Some(password)) => Some(DemoAccount { username, password }),
            _ => None,
        };

        Self {
            port: parse_or("PORT", DEFAULT_PORT),
            catalog_path: var("CATALOG_PATH").map(PathBuf::from),
            default_points: parse_or("DEFAULT_POINTS", DEFAULT_POINTS),
            jwt: JwtConfig::from_env(),
            cors_origin: var("CORS_ORIGIN"),
            demo_account,
        }
    }
}

/// Non-empty environment variable
pub(crate) fn var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match var(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
