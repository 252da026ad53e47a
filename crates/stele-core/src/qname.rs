//! Qualified names: hierarchical, human-stable asset identifiers.
//!
//! Every catalog asset carries a slash-delimited qualified name derived
//! from its parent's qualified name plus the asset's own short name.
//! Qualified names double as a natural key: two assets with equal
//! qualified names are the same logical asset as far as the server is
//! concerned (uniqueness is enforced server-side, not here).
//!
//! # Composition rules
//!
//! - Container assets (accounts, buckets, namespaces):
//!   `{parent}/{name}`
//! - Kinded sub-resources (e.g. message-bus topics):
//!   `{parent}/{kind}/{name}`
//! - Lineage processes: `{parent}/{hash}` where the hash covers the
//!   process id and the *sorted* input/output identifier sets, so that
//!   re-running the same logical pipeline step reproduces the same
//!   qualified name regardless of the order inputs were listed in.
//!
//! Generation is pure and deterministic. Collisions (two distinct
//! assets given the same short name under one parent) are a caller
//! error and are not handled defensively.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Number of hex characters of the process hash kept in the name.
const PROCESS_HASH_LEN: usize = 32;

/// A hierarchical, slash-delimited unique identifier for a catalog asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    /// Wraps an existing qualified-name string.
    #[must_use]
    pub fn new(qn: impl Into<String>) -> Self {
        Self(qn.into())
    }

    /// Returns the qualified name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the qualified name of a container-style child asset:
    /// `{self}/{name}`.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        Self(format!("{}/{name}", self.0))
    }

    /// Derives the qualified name of a kinded sub-resource:
    /// `{self}/{kind}/{name}`.
    #[must_use]
    pub fn kinded_child(&self, kind: &str, name: &str) -> Self {
        Self(format!("{}/{kind}/{name}", self.0))
    }

    /// Derives the qualified name of a lineage process under this parent.
    ///
    /// The name is `{self}/{hash}` where the hash covers the process id
    /// and both identifier sets after canonicalization (sorting), so the
    /// same logical process always converges to the same key and can be
    /// used for idempotent upserts.
    #[must_use]
    pub fn process(&self, process_id: &str, inputs: &[String], outputs: &[String]) -> Self {
        let mut sorted_inputs = inputs.to_vec();
        sorted_inputs.sort_unstable();
        let mut sorted_outputs = outputs.to_vec();
        sorted_outputs.sort_unstable();

        let mut hasher = Sha256::new();
        hasher.update(process_id.as_bytes());
        for input in &sorted_inputs {
            hasher.update(b"\nin:");
            hasher.update(input.as_bytes());
        }
        for output in &sorted_outputs {
            hasher.update(b"\nout:");
            hasher.update(output.as_bytes());
        }
        let digest = hex::encode(hasher.finalize());
        Self(format!("{}/{}", self.0, &digest[..PROCESS_HASH_LEN]))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QualifiedName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Classification of a caller-supplied identifier string.
///
/// The GUID pattern wins if and only if the full string parses as a
/// UUID; anything else is treated as a qualified name. There is no
/// ambiguous middle ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// The identifier is UUID-shaped: look up by GUID.
    Guid,
    /// The identifier is a qualified name: look up by natural key.
    QualifiedName,
}

impl IdKind {
    /// Classifies an identifier string as GUID-shaped or
    /// qualified-name-shaped.
    #[must_use]
    pub fn classify(id: &str) -> Self {
        if Uuid::try_parse(id).is_ok() {
            Self::Guid
        } else {
            Self::QualifiedName
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_rule() {
        let conn = QualifiedName::new("conn/aws");
        assert_eq!(conn.child("bucket1").as_str(), "conn/aws/bucket1");
    }

    #[test]
    fn kinded_rule() {
        let conn = QualifiedName::new("conn/aws");
        assert_eq!(
            conn.kinded_child("topic", "t1").as_str(),
            "conn/aws/topic/t1"
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let conn = QualifiedName::new("conn/gcp");
        assert_eq!(conn.child("ns1"), conn.child("ns1"));

        let inputs = vec!["a".to_string(), "b".to_string()];
        let outputs = vec!["c".to_string()];
        assert_eq!(
            conn.process("etl-step", &inputs, &outputs),
            conn.process("etl-step", &inputs, &outputs)
        );
    }

    #[test]
    fn process_hash_ignores_input_order() {
        let conn = QualifiedName::new("conn/aws");
        let forward = vec!["in1".to_string(), "in2".to_string(), "in3".to_string()];
        let reversed = vec!["in3".to_string(), "in2".to_string(), "in1".to_string()];
        let outputs = vec!["out1".to_string()];
        assert_eq!(
            conn.process("p1", &forward, &outputs),
            conn.process("p1", &reversed, &outputs)
        );
    }

    #[test]
    fn process_hash_distinguishes_inputs_from_outputs() {
        let conn = QualifiedName::new("conn/aws");
        let a = vec!["x".to_string()];
        let b = vec!["y".to_string()];
        assert_ne!(conn.process("p1", &a, &b), conn.process("p1", &b, &a));
    }

    #[test]
    fn different_process_ids_get_different_names() {
        let conn = QualifiedName::new("conn/aws");
        let inputs = vec!["x".to_string()];
        assert_ne!(
            conn.process("p1", &inputs, &[]),
            conn.process("p2", &inputs, &[])
        );
    }

    #[test]
    fn classify_uuid_as_guid() {
        assert_eq!(
            IdKind::classify("9c5a42a1-7d8e-4f1a-9d2b-3e4f5a6b7c8d"),
            IdKind::Guid
        );
    }

    #[test]
    fn classify_path_as_qualified_name() {
        assert_eq!(IdKind::classify("conn/aws/bucket1"), IdKind::QualifiedName);
        assert_eq!(IdKind::classify("bucket1"), IdKind::QualifiedName);
        // Negative placeholder GUIDs are not UUID-shaped either; callers
        // never resolve placeholders against the server.
        assert_eq!(
            IdKind::classify("-4611686018427387904"),
            IdKind::QualifiedName
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn process_name_is_stable_under_reordering(
                mut ids in prop::collection::vec("[a-z0-9/]{1,20}", 1..8),
                outputs in prop::collection::vec("[a-z0-9/]{1,20}", 0..4),
            ) {
                let parent = QualifiedName::new("conn/aws");
                let original = parent.process("step", &ids, &outputs);
                ids.reverse();
                let reordered = parent.process("step", &ids, &outputs);
                prop_assert_eq!(original, reordered);
            }
        }
    }
}
