//! Identifier types shared across the runtime.
//!
//! Both identifiers here are minted upstream — the session daemon assigns
//! session ids, the extension host assigns request ids — and are opaque to
//! this workspace. They wrap the daemon's strings instead of generating
//! anything locally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a conversational session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a daemon-assigned session identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for one approval-required action.
///
/// Stable across UI remounts: the same request surfaces under the same id
/// no matter how often the widget presenting it is created and destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Wrap a host-assigned request identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_round_trip() {
        let id = RequestId::new("req-42");
        assert_eq!(id.as_str(), "req-42");
        assert_eq!(id.to_string(), "req-42");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"req-42\"");
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_session_id_transparent_serde() {
        let id: SessionId = serde_json::from_str("\"20260806_104501\"").unwrap();
        assert_eq!(id.as_str(), "20260806_104501");
    }

    #[test]
    fn test_ids_usable_as_map_keys() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(RequestId::from("a"), 1);
        map.insert(RequestId::from("b"), 2);
        assert_eq!(map.get(&RequestId::new("a")), Some(&1));
    }
}
