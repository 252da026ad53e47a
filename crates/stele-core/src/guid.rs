//! Opaque asset identifiers with a client-side placeholder convention.
//!
//! The catalog server assigns every persisted asset a GUID in UUID form.
//! Assets that exist only in client memory (built by a creator or
//! updater, not yet saved) carry a *placeholder* GUID instead: a random
//! negative 63-bit integer encoded as a string. Server GUIDs are never
//! negative, so the two ranges cannot collide and the sign alone tells
//! a reader whether an object round-tripped through the server.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An opaque asset identifier.
///
/// Either server-assigned (UUID-shaped) or a client-side placeholder
/// (negative integer string) standing in for an asset that has not been
/// created yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guid(String);

impl Guid {
    /// Wraps a server-assigned GUID string.
    #[must_use]
    pub fn new(guid: impl Into<String>) -> Self {
        Self(guid.into())
    }

    /// Generates a fresh placeholder GUID for a not-yet-created asset.
    ///
    /// Uses the thread-local RNG, so generation is safe from any number
    /// of concurrent threads. Collisions across the 63-bit range are
    /// astronomically unlikely and are not checked.
    #[must_use]
    pub fn placeholder() -> Self {
        let n: i64 = rand::thread_rng().gen_range(1..=i64::MAX);
        Self(format!("-{n}"))
    }

    /// Returns `true` if this is a client-side placeholder (negative).
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Returns `true` if this GUID was assigned by the server.
    #[must_use]
    pub fn is_server_assigned(&self) -> bool {
        !self.is_placeholder()
    }

    /// Returns the GUID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Guid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Guid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn placeholder_is_negative() {
        let guid = Guid::placeholder();
        assert!(guid.is_placeholder());
        assert!(!guid.is_server_assigned());
        assert!(guid.as_str().starts_with('-'));
        // The remainder parses as a positive integer.
        let magnitude: i64 = guid.as_str()[1..].parse().unwrap();
        assert!(magnitude > 0);
    }

    #[test]
    fn server_guid_is_not_placeholder() {
        let guid = Guid::new("9c5a42a1-7d8e-4f1a-9d2b-3e4f5a6b7c8d");
        assert!(guid.is_server_assigned());
        assert!(!guid.is_placeholder());
    }

    #[test]
    fn placeholders_do_not_collide_in_tight_loop() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(Guid::placeholder()));
        }
    }

    #[test]
    fn serde_is_transparent() {
        let guid = Guid::new("abc");
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
