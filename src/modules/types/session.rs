//! Connector session lifecycle states

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a connector session
///
/// A connector moves `Unconnected -> Connected -> Closed`. `Closed` is
/// terminal: a closed connector is never resurrected, callers build a
/// fresh instance from the configuration instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Created but no underlying session established yet
    Unconnected,
    /// Underlying session established and usable
    Connected,
    /// All resources released; terminal
    Closed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unconnected => write!(f, "unconnected"),
            SessionState::Connected => write!(f, "connected"),
            SessionState::Closed => write!(f, "closed"),
        }
    }
}

impl SessionState {
    /// Returns true if queries and schema lookups are valid in this state
    pub fn can_query(&self) -> bool {
        matches!(self, SessionState::Connected)
    }

    /// Returns true if this state is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_query() {
        assert!(!SessionState::Unconnected.can_query());
        assert!(SessionState::Connected.can_query());
        assert!(!SessionState::Closed.can_query());
    }

    #[test]
    fn test_is_terminal() {
        assert!(!SessionState::Unconnected.is_terminal());
        assert!(!SessionState::Connected.is_terminal());
        assert!(SessionState::Closed.is_terminal());
    }

    #[test]
    fn test_session_state_display() {
        assert_eq!(SessionState::Unconnected.to_string(), "unconnected");
        assert_eq!(SessionState::Connected.to_string(), "connected");
        assert_eq!(SessionState::Closed.to_string(), "closed");
    }
}
