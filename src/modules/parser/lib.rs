//! Configuration parsing for Dataport
//!
//! Loads connection configurations from YAML or JSON text, substituting
//! `{{ env.VAR }}` placeholders before deserialization so credentials can
//! stay out of config files.

pub mod config;
pub mod env;

pub use config::ConfigParser;
pub use env::EnvSubstitutor;
