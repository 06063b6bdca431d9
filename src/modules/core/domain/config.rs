//! Connection configuration

use crate::error::DataportError;
use dataport_types::Backend;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Connection configuration for one connector instance
///
/// The `kind` discriminator selects the adapter; every other field is
/// adapter-specific and validated by the adapter, not here. A configuration
/// is constructed once and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Backend discriminator (required)
    pub kind: Backend,

    /// Backend host name or address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Backend port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Database name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// User name for authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Password for authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Whether the deployment is read-only
    #[serde(default)]
    pub read_only: bool,

    /// Connection pool configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolConfig>,
}

impl ConnectionConfig {
    /// Create a minimal configuration for the given backend kind
    pub fn new(kind: Backend) -> Self {
        Self {
            kind,
            host: None,
            port: None,
            database: None,
            user: None,
            password: None,
            read_only: false,
            pool: None,
        }
    }

    /// Set the read-only flag
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set the database name
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Build a configuration from a generic JSON mapping
    ///
    /// The `kind` discriminator is checked explicitly before
    /// deserialization, so a missing key reports `Configuration` and an
    /// unrecognized kind reports `UnknownKind` instead of a generic
    /// deserialization failure.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DataportError> {
        let map = value.as_object().ok_or_else(|| {
            DataportError::Configuration("connection configuration must be a mapping".to_string())
        })?;

        let kind = map.get("kind").ok_or_else(|| {
            DataportError::Configuration("missing required field 'kind'".to_string())
        })?;

        let kind_str = kind.as_str().ok_or_else(|| {
            DataportError::Configuration("field 'kind' must be a string".to_string())
        })?;

        Backend::from_str(kind_str)
            .map_err(|_| DataportError::UnknownKind(kind_str.to_string()))?;

        Ok(serde_json::from_value(serde_json::Value::Object(map.clone()))?)
    }
}

/// Connection pool configuration for adapters that pool sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Maximum number of connections in the pool (default: 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,

    /// Minimum number of connections to maintain (default: 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_connections: Option<u32>,

    /// Connection acquire timeout in seconds (default: 30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquire_timeout_secs: Option<u64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: Some(10),
            min_connections: Some(1),
            acquire_timeout_secs: Some(30),
        }
    }
}

impl PoolConfig {
    /// Get max connections with default fallback
    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(10)
    }

    /// Get min connections with default fallback
    pub fn min_connections(&self) -> u32 {
        self.min_connections.unwrap_or(1)
    }

    /// Get acquire timeout with default fallback
    pub fn acquire_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.acquire_timeout_secs.unwrap_or(30))
    }
}
