//! Connector contract and adapters for Dataport
//!
//! This crate defines the [`DatabasePort`] capability contract, the
//! in-memory [`MockConnector`] reference adapter, factory dispatch from a
//! connection configuration, and a registry for named connectors.

mod factory;
mod manager;
mod mock;
mod traits;

pub use factory::{create_connector, open};
pub use manager::{ConnectorManager, SharedConnector};
pub use mock::MockConnector;
pub use traits::{DatabasePort, RowStream};
