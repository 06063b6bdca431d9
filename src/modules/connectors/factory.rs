//! Connector construction from configuration

use dataport_core::{ConnectionConfig, DataportError};
use dataport_types::Backend;
use tracing::debug;

use super::mock::MockConnector;
use super::traits::DatabasePort;

/// Build a connector for the configured backend kind
///
/// Tagged-variant dispatch on the discriminator. An unrecognized kind
/// never reaches this point: it is rejected as `UnknownKind` while the
/// configuration is built. The returned connector starts `Unconnected`.
pub fn create_connector(config: ConnectionConfig) -> Result<Box<dyn DatabasePort>, DataportError> {
    debug!(kind = %config.kind, "creating connector");
    match config.kind {
        Backend::Mock => Ok(Box::new(MockConnector::new(config))),
    }
}

/// Build a connector and establish its session in one step
pub async fn open(config: ConnectionConfig) -> Result<Box<dyn DatabasePort>, DataportError> {
    let mut connector = create_connector(config)?;
    connector.connect().await?;
    Ok(connector)
}
