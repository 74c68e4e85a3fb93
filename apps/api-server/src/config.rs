//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use postboard_infra::database::{ConnectionParams, ConnectionStringError, DatabaseConfig};

const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5000",
    "http://localhost:5173",
    "https://post-management-ui.vercel.app",
];

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not a valid connection string: {0}")]
    ConnectionString(#[from] ConnectionStringError),

    #[error("{name} must be {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub cors: CorsConfig,
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(String::from).to_vec(),
        }
    }
}

impl CorsConfig {
    /// `*` in the list opens the API to every origin (without credentials).
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `var`, which returns the raw value of a variable.
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match var("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(DatabaseConfig {
                connection: ConnectionParams::parse(&raw)?,
                max_connections: parse_or(&var, "DB_MAX_CONNECTIONS", 100, "a positive integer")?,
                min_connections: parse_or(&var, "DB_MIN_CONNECTIONS", 10, "a positive integer")?,
                create_schema: parse_or(&var, "DB_CREATE_SCHEMA", true, "true or false")?,
            }),
            None => None,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&var, "PORT", 8080, "a port number")?,
            database,
            cors: parse_cors(&var)?,
        })
    }
}

fn parse_or<F, T>(
    var: &F,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name,
                expected,
                value,
            }),
        None => Ok(default),
    }
}

/// Format: CORS_ALLOWED_ORIGINS=<ORIGIN>,<ORIGIN>,...
fn parse_cors<F>(var: &F) -> Result<CorsConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = var("CORS_ALLOWED_ORIGINS") else {
        return Ok(CorsConfig::default());
    };

    let allowed_origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect();

    if let Some(bad) = allowed_origins
        .iter()
        .find(|o| *o != "*" && !o.starts_with("http://") && !o.starts_with("https://"))
    {
        return Err(ConfigError::InvalidValue {
            name: "CORS_ALLOWED_ORIGINS",
            expected: "a comma-separated list of http(s) origins or *",
            value: bad.clone(),
        });
    }

    Ok(CorsConfig { allowed_origins })
}
