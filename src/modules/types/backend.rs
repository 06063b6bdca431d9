//! Backend discriminator definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported backend kinds
///
/// The discriminator in a connection configuration selects which adapter
/// is instantiated. Only the in-memory mock adapter ships today; real
/// engine adapters register a new variant here plus a factory arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-memory reference adapter
    Mock,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Mock => write!(f, "mock"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" | "memory" => Ok(Backend::Mock),
            _ => Err(format!("Unknown backend kind: {}", s)),
        }
    }
}

impl Backend {
    /// Returns all supported backend kinds
    pub fn all() -> &'static [Backend] {
        &[Backend::Mock]
    }
}
