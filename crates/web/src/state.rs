//! Shared state for the session middleware.

use std::sync::Arc;

use sessionstore::SessionRegistry;

use crate::config::SessionConfig;

/// Registry and cookie settings handed to the middleware with
/// [`axum::middleware::from_fn_with_state`].
#[derive(Debug, Clone)]
pub struct SessionLayer {
    registry: SessionRegistry,
    config: Arc<SessionConfig>,
}

impl SessionLayer {
    pub fn new(registry: SessionRegistry, config: SessionConfig) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
