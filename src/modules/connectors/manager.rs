//! Registry of named connectors

use dataport_core::{ConnectionConfig, DataportError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use super::factory;
use super::traits::DatabasePort;

/// Shared handle to one registered connector
///
/// The contract makes no thread-safety promise for a single instance, so
/// every registered connector sits behind its own async mutex.
pub type SharedConnector = Arc<Mutex<Box<dyn DatabasePort>>>;

/// Manages multiple named connectors
///
/// Callers that need concurrent queries register several connectors and
/// take one handle each; the manager never shares a session between them.
pub struct ConnectorManager {
    connectors: RwLock<HashMap<String, SharedConnector>>,
}

impl ConnectorManager {
    /// Create a new empty connector manager
    pub fn new() -> Self {
        Self {
            connectors: RwLock::new(HashMap::new()),
        }
    }

    /// Create, connect, and register a connector under the given name
    ///
    /// Replaces any previous connector of the same name; the replaced one
    /// is closed first so its session is not leaked.
    pub async fn register(
        &self,
        name: impl Into<String>,
        config: ConnectionConfig,
    ) -> Result<(), DataportError> {
        let name = name.into();
        let connector = factory::open(config).await?;

        let mut connectors = self.connectors.write().await;
        if let Some(previous) = connectors.insert(name.clone(), Arc::new(Mutex::new(connector))) {
            warn!(name = %name, "replacing registered connector");
            previous.lock().await.close().await?;
        }
        debug!(name = %name, "connector registered");
        Ok(())
    }

    /// Get a registered connector by name
    pub async fn get(&self, name: &str) -> Result<SharedConnector, DataportError> {
        let connectors = self.connectors.read().await;
        connectors
            .get(name)
            .cloned()
            .ok_or_else(|| DataportError::NotFound(format!("connector '{}'", name)))
    }

    /// Check if a connector is registered under the given name
    pub async fn has(&self, name: &str) -> bool {
        let connectors = self.connectors.read().await;
        connectors.contains_key(name)
    }

    /// Names of all registered connectors
    pub async fn names(&self) -> Vec<String> {
        let connectors = self.connectors.read().await;
        connectors.keys().cloned().collect()
    }

    /// Close all registered connectors
    pub async fn close_all(&self) -> Result<(), DataportError> {
        let connectors = self.connectors.read().await;
        let mut errors = Vec::new();

        for (name, connector) in connectors.iter() {
            if let Err(e) = connector.lock().await.close().await {
                errors.push(format!("{}: {}", name, e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DataportError::Connection(format!(
                "errors closing connectors: {}",
                errors.join(", ")
            )))
        }
    }
}

impl Default for ConnectorManager {
    fn default() -> Self {
        Self::new()
    }
}
