use std::sync::Arc;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::database::Store;
use crate::services::CredentialService;

/// Shared per-process context handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn Store>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn Store>) -> Self {
        let tokens = TokenService::from_config(&config.security);
        Self {
            config: Arc::new(config),
            store,
            tokens,
        }
    }

    pub fn credentials(&self) -> CredentialService<'_> {
        CredentialService::new(self.store.as_ref())
    }
}
