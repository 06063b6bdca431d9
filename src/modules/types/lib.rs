//! Type definitions for Dataport
//!
//! This crate contains shared type definitions used across the Dataport
//! codebase, including the backend discriminator, session lifecycle states,
//! and result row types.

pub mod backend;
pub mod row;
pub mod session;

pub use backend::Backend;
pub use row::{row_from_pairs, Row, Schema};
pub use session::SessionState;
