//! Domain models for Dataport configuration

mod config;

pub use config::{ConnectionConfig, PoolConfig};
