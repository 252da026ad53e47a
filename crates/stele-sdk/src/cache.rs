//! Memoizing name-to-id caches for users, groups, and custom metadata.
//!
//! The catalog addresses people and custom-metadata structures by
//! opaque id, while callers hold human-readable names. [`IdCache`]
//! wraps a backing [`IdLookup`] collaborator with read-through-on-miss
//! memoization. Entries are never invalidated; these mappings are
//! stable for the life of a process.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use stele_core::{Error, Result};

/// Which name-to-id mapping a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    /// User name to user id.
    User,
    /// Group name to group id.
    Group,
    /// Custom-metadata structure name to structure id.
    CustomMetadata,
}

impl CacheKind {
    /// Returns the kind as a lowercase string for diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::CustomMetadata => "custom metadata",
        }
    }
}

/// Backing lookup for cache misses.
///
/// Implemented by the catalog transport; absence is `Ok(None)`.
pub trait IdLookup {
    /// Resolves a human-readable name to an opaque id.
    ///
    /// # Errors
    ///
    /// Returns transport-level failures only.
    fn resolve(&self, kind: CacheKind, human_name: &str) -> Result<Option<String>>;
}

/// A memoizing key/value cache with read-through-on-miss semantics.
///
/// Safe for concurrent use; a miss may race another miss for the same
/// key, in which case both resolve and the second write wins with an
/// identical value.
#[derive(Debug)]
pub struct IdCache<L> {
    entries: RwLock<HashMap<(CacheKind, String), String>>,
    lookup: L,
}

fn poison_err<T>(_: PoisonError<T>) -> Error {
    Error::internal("lock poisoned")
}

impl<L: IdLookup> IdCache<L> {
    /// Creates an empty cache over the given backing lookup.
    pub fn new(lookup: L) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            lookup,
        }
    }

    /// Returns the id for a human-readable name, consulting the backing
    /// lookup on a miss and memoizing the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the name is unknown to the
    /// backing lookup, or any transport failure the lookup raises.
    pub fn id_for(&self, kind: CacheKind, human_name: &str) -> Result<String> {
        let key = (kind, human_name.to_string());
        if let Some(id) = self.entries.read().map_err(poison_err)?.get(&key) {
            return Ok(id.clone());
        }

        debug!(kind = kind.as_str(), name = human_name, "cache miss, resolving");
        let id = self
            .lookup
            .resolve(kind, human_name)?
            .ok_or_else(|| {
                Error::invalid_input(format!("unknown {} name: {human_name}", kind.as_str()))
            })?;

        self.entries
            .write()
            .map_err(poison_err)?
            .insert(key, id.clone());
        Ok(id)
    }
}
