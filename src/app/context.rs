use std::sync::Arc;

use crate::domain::ClientConfig;
use crate::ports::StoreClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: StoreClient> {
    client: Arc<C>,
    config: ClientConfig,
}

impl<C: StoreClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(client: C, config: ClientConfig) -> Self {
        Self { client: Arc::new(client), config }
    }

    /// Get a reference to the store client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Shared handle to the store client for background tasks.
    pub fn shared_client(&self) -> Arc<C> {
        Arc::clone(&self.client)
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
