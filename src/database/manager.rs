use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::memory::MemoryStore;
use super::postgres::PgStore;
use super::store::Store;
use crate::config::DatabaseConfig;

/// URL that selects the in-memory backend
pub const MEMORY_URL: &str = "memory://";

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Opens the configured backend once at startup
pub struct DatabaseManager;

impl DatabaseManager {
    /// Connect to the configured store and make sure its schema exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn Store>, DatabaseError> {
        match config.url.as_deref() {
            None | Some(MEMORY_URL) => {
                info!("Using in-memory store; data is lost on shutdown");
                Ok(Arc::new(MemoryStore::new()))
            }
            Some(url) => {
                Self::validate_url(url)?;
                let store = PgStore::connect(url, config.max_connections).await?;
                store.init_schema().await?;
                info!("Connected to database: {}", redact_url(url));
                Ok(Arc::new(store))
            }
        }
    }

    fn validate_url(url: &str) -> Result<(), DatabaseError> {
        let parsed =
            url::Url::parse(url).map_err(|e| DatabaseError::InvalidDatabaseUrl(e.to_string()))?;
        match parsed.scheme() {
            "postgres" | "postgresql" => Ok(()),
            other => Err(DatabaseError::InvalidDatabaseUrl(format!(
                "unsupported scheme '{}'",
                other
            ))),
        }
    }
}

/// Mask the password component of a connection string for logging
pub fn redact_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("****"));
            }
            url.into()
        }
        Err(_) => "<unparseable>".to_string(),
    }
}
