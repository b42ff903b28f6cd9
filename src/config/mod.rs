use std::env;
use std::fmt;

use thiserror::Error;

/// Default HTTP port, matching the development server the API was first served from.
pub const DEFAULT_PORT: u16 = 5000;

/// Longest accepted token lifetime, one hundred years.
pub const MAX_JWT_EXPIRY_HOURS: u64 = 100 * 365 * 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT signing secret is not configured (set JWT_SECRET_KEY)")]
    MissingSecret,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Environment::Development => "todo_api=debug,tower_http=debug,info",
            Environment::Staging => "todo_api=info,tower_http=info,warn",
            Environment::Production => "todo_api=info,warn",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string; `None` or `memory://` selects the in-memory store
    pub url: Option<String>,
    pub max_connections: u32,
    /// Schema change tracking toggle. Only reported at startup.
    pub track_modifications: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    /// Token lifetime. `None` issues tokens without an `exp` claim.
    pub jwt_expiry_hours: Option<u64>,
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Keys are read once;
    /// legacy names are accepted as fallbacks for the primary ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: &[&str]| -> Option<String> {
            keys.iter()
                .filter_map(|k| lookup(*k))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };

        let environment = match first(&["APP_ENV"]).as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let mut config = match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        };

        config.database.url = first(&["DATABASE_URL", "SQLALCHEMY_DATABASE_URI"]);

        if let Some(v) = first(&["TRACK_MODIFICATIONS", "SQLALCHEMY_TRACK_MODIFICATIONS"]) {
            config.database.track_modifications = parse_bool("TRACK_MODIFICATIONS", &v)?;
        }
        if let Some(v) = first(&["DATABASE_MAX_CONNECTIONS"]) {
            config.database.max_connections = parse_number("DATABASE_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = first(&["TODO_API_HOST"]) {
            config.server.host = v;
        }
        if let Some(v) = first(&["TODO_API_PORT", "PORT"]) {
            config.server.port = parse_number("TODO_API_PORT", &v)?;
        }

        config.security.jwt_secret =
            first(&["JWT_SECRET_KEY", "JWT_SECRET"]).ok_or(ConfigError::MissingSecret)?;

        if let Some(v) = first(&["JWT_EXPIRY_HOURS"]) {
            let hours: u64 = parse_number("JWT_EXPIRY_HOURS", &v)?;
            if hours > MAX_JWT_EXPIRY_HOURS {
                return Err(ConfigError::InvalidValue {
                    key: "JWT_EXPIRY_HOURS",
                    value: v,
                });
            }
            config.security.jwt_expiry_hours = (hours > 0).then_some(hours);
        }

        Ok(config)
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
                track_modifications: false,
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: None,
            },
        }
    }

    fn staging() -> Self {
        let mut config = Self::development();
        config.environment = Environment::Staging;
        config.database.max_connections = 20;
        config
    }

    fn production() -> Self {
        let mut config = Self::development();
        config.environment = Environment::Production;
        config.database.max_connections = 50;
        config
    }

    /// Report the effective configuration. The signing secret is never logged.
    pub fn log_startup(&self) {
        let database = match &self.database.url {
            Some(url) => crate::database::manager::redact_url(url),
            None => "memory://".to_string(),
        };
        tracing::info!("environment: {:?}", self.environment);
        tracing::info!("database url: {}", database);
        tracing::info!("database max connections: {}", self.database.max_connections);
        tracing::info!("track modifications: {}", self.database.track_modifications);
        tracing::info!(
            "jwt secret: configured ({} bytes)",
            self.security.jwt_secret.len()
        );
        match self.security.jwt_expiry_hours {
            Some(hours) => tracing::info!("jwt expiry: {}h", hours),
            None => tracing::warn!("jwt expiry: disabled, issued tokens never expire"),
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
