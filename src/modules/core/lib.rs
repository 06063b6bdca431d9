//! Core domain logic for Dataport
//!
//! This crate contains the connection configuration model, the query
//! validation policy, and the error taxonomy for the connector contract.

pub mod domain;
pub mod error;
pub mod policy;

pub use domain::*;
pub use error::DataportError;
pub use policy::validate_query;
